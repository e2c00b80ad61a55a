//! Declarative SQL fragment builders shared by the entity repositories.
//!
//! # Responsibility
//! - Turn optional-field filter/update structs into parameterized fragments.
//! - Keep pagination rules for SQLite in one place.
//!
//! # Invariants
//! - Column names are static identifiers; caller data only travels as bound
//!   values.
//! - An absent value or an empty list contributes no fragment.

use crate::model::{ParentChange, ROOT_PARENT_ID};
use rusqlite::types::Value;

/// Conjunction of equality / membership / null predicates.
#[derive(Debug, Default)]
pub(crate) struct WhereClause {
    predicates: Vec<String>,
    values: Vec<Value>,
}

impl WhereClause {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `column = ?` when `value` is present.
    pub(crate) fn eq<T: Into<Value>>(
        &mut self,
        column: &'static str,
        value: Option<T>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.predicates.push(format!("{column} = ?"));
            self.values.push(value.into());
        }
        self
    }

    /// `column IN (?, ...)` when `values` is non-empty.
    pub(crate) fn in_list<T>(&mut self, column: &'static str, values: &[T]) -> &mut Self
    where
        T: Clone + Into<Value>,
    {
        if values.is_empty() {
            return self;
        }
        let placeholders = vec!["?"; values.len()].join(", ");
        self.predicates.push(format!("{column} IN ({placeholders})"));
        self.values.extend(values.iter().cloned().map(Into::into));
        self
    }

    /// Parent filter: `ROOT_PARENT_ID` matches `IS NULL`, other ids match by
    /// equality, `None` adds nothing.
    pub(crate) fn parent(&mut self, column: &'static str, parent_id: Option<i32>) -> &mut Self {
        match parent_id {
            None => self,
            Some(ROOT_PARENT_ID) => {
                self.predicates.push(format!("{column} IS NULL"));
                self
            }
            Some(id) => self.eq(column, Some(id)),
        }
    }

    /// Renders ` WHERE a AND b` (empty string when unconstrained) and the
    /// bound values in placeholder order.
    pub(crate) fn into_parts(self) -> (String, Vec<Value>) {
        if self.predicates.is_empty() {
            return (String::new(), self.values);
        }
        (
            format!(" WHERE {}", self.predicates.join(" AND ")),
            self.values,
        )
    }
}

/// Comma-joined column assignments for partial updates.
#[derive(Debug, Default)]
pub(crate) struct SetClause {
    assignments: Vec<String>,
    values: Vec<Value>,
}

impl SetClause {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `column = ?` when `value` is present.
    pub(crate) fn set<T: Into<Value>>(
        &mut self,
        column: &'static str,
        value: Option<T>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.assignments.push(format!("{column} = ?"));
            self.values.push(value.into());
        }
        self
    }

    /// `Set(id)` assigns `id`, `Clear` assigns `NULL`.
    pub(crate) fn parent(
        &mut self,
        column: &'static str,
        change: Option<ParentChange>,
    ) -> &mut Self {
        match change {
            None => self,
            Some(ParentChange::Set(id)) => self.set(column, Some(id)),
            Some(ParentChange::Clear) => {
                self.assignments.push(format!("{column} = NULL"));
                self
            }
        }
    }

    /// Renders `a = ?, b = ?` and the bound values in placeholder order.
    pub(crate) fn into_parts(self) -> (String, Vec<Value>) {
        (self.assignments.join(", "), self.values)
    }
}

/// Appends `LIMIT`/`OFFSET`. SQLite needs a `LIMIT` before `OFFSET`, so an
/// offset alone becomes `LIMIT -1 OFFSET ?`.
pub(crate) fn push_pagination(
    sql: &mut String,
    values: &mut Vec<Value>,
    limit: Option<u32>,
    offset: Option<u32>,
) {
    match (limit, offset) {
        (Some(limit), offset) => {
            sql.push_str(" LIMIT ?");
            values.push(Value::Integer(i64::from(limit)));
            if let Some(offset) = offset {
                sql.push_str(" OFFSET ?");
                values.push(Value::Integer(i64::from(offset)));
            }
        }
        (None, Some(offset)) => {
            sql.push_str(" LIMIT -1 OFFSET ?");
            values.push(Value::Integer(i64::from(offset)));
        }
        (None, None) => {}
    }
}
