//! Area repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/list/update/delete over the `area` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Listing order is `created_ts DESC, id DESC` (newest first).
//! - Update always writes `updated_ts`; delete is a hard delete.
//! - Zero affected rows on update/delete is not an error.

use super::query::{push_pagination, SetClause, WhereClause};
use super::{ensure_table_ready, parse_row_status, unix_now, RepoResult};
use crate::db::schema::AREA_TABLE;
use crate::model::area::{Area, CreateArea, DeleteArea, FindArea, UpdateArea};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};

const AREA_COLUMNS: &[&str] = &[
    "id",
    "uid",
    "creator_id",
    "created_ts",
    "updated_ts",
    "row_status",
    "name",
    "description",
    "parent_id",
];

const AREA_RETURNING: &str =
    "id, uid, creator_id, created_ts, updated_ts, row_status, name, description, parent_id";

/// Repository interface for area persistence.
pub trait AreaRepository {
    /// Inserts one area and returns the stored row.
    fn create_area(&self, create: &CreateArea) -> RepoResult<Area>;
    /// Lists areas matching every present filter field.
    fn list_areas(&self, find: &FindArea) -> RepoResult<Vec<Area>>;
    /// Applies a partial update by id.
    fn update_area(&self, update: &UpdateArea) -> RepoResult<()>;
    /// Hard-deletes one area by id.
    fn delete_area(&self, delete: &DeleteArea) -> RepoResult<()>;
}

/// SQLite-backed area repository.
pub struct SqliteAreaRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAreaRepository<'conn> {
    /// Creates repository from a bootstrapped connection.
    ///
    /// # Errors
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the connection
    ///   was not opened through `db::open_*`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, AREA_TABLE, AREA_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl AreaRepository for SqliteAreaRepository<'_> {
    fn create_area(&self, create: &CreateArea) -> RepoResult<Area> {
        let mut columns = vec!["uid", "creator_id", "name", "description"];
        let mut values = vec![
            Value::Text(create.uid.clone()),
            Value::Integer(i64::from(create.creator_id)),
            Value::Text(create.name.clone()),
            Value::Text(create.description.clone()),
        ];
        if let Some(parent_id) = create.parent_id {
            columns.push("parent_id");
            values.push(Value::Integer(i64::from(parent_id)));
        }

        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT INTO area ({}) VALUES ({placeholders}) RETURNING {AREA_RETURNING};",
            columns.join(", ")
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(values))?;
        match rows.next()? {
            Some(row) => parse_area_row(row),
            None => Err(rusqlite::Error::QueryReturnedNoRows.into()),
        }
    }

    fn list_areas(&self, find: &FindArea) -> RepoResult<Vec<Area>> {
        let mut filter = WhereClause::new();
        filter
            .eq("id", find.id)
            .eq("uid", find.uid.clone())
            .in_list("id", &find.id_list)
            .in_list("uid", &find.uid_list)
            .eq(
                "row_status",
                find.row_status.map(|status| status.as_db_str().to_string()),
            )
            .eq("creator_id", find.creator_id)
            .parent("parent_id", find.parent_id);
        let (where_sql, mut values) = filter.into_parts();

        let mut sql = format!(
            "SELECT {AREA_RETURNING} FROM area{where_sql} ORDER BY created_ts DESC, id DESC"
        );
        push_pagination(&mut sql, &mut values, find.limit, find.offset);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(values))?;
        let mut areas = Vec::new();
        while let Some(row) = rows.next()? {
            areas.push(parse_area_row(row)?);
        }
        Ok(areas)
    }

    fn update_area(&self, update: &UpdateArea) -> RepoResult<()> {
        let mut set = SetClause::new();
        set.set("updated_ts", Some(update.updated_ts.unwrap_or_else(unix_now)))
            .set(
                "row_status",
                update.row_status.map(|status| status.as_db_str().to_string()),
            )
            .set("name", update.name.clone())
            .set("description", update.description.clone())
            .parent("parent_id", update.parent)
            .set("uid", update.uid.clone());
        let (set_sql, mut values) = set.into_parts();
        values.push(Value::Integer(i64::from(update.id)));

        self.conn.execute(
            &format!("UPDATE area SET {set_sql} WHERE id = ?;"),
            params_from_iter(values),
        )?;
        Ok(())
    }

    fn delete_area(&self, delete: &DeleteArea) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM area WHERE id = ?1;", [delete.id])?;
        Ok(())
    }
}

fn parse_area_row(row: &Row<'_>) -> RepoResult<Area> {
    let row_status_text: String = row.get("row_status")?;
    Ok(Area {
        id: row.get("id")?,
        uid: row.get("uid")?,
        row_status: parse_row_status(&row_status_text, "area.row_status")?,
        creator_id: row.get("creator_id")?,
        created_ts: row.get("created_ts")?,
        updated_ts: row.get("updated_ts")?,
        name: row.get("name")?,
        description: row.get("description")?,
        parent_id: row.get("parent_id")?,
    })
}
