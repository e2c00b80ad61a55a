//! Folder repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/list/update/delete over the `folder` table.
//!
//! # Invariants
//! - Every folder row carries a non-null `area_id`.
//! - Listing order is `created_ts DESC, id DESC` (newest first).
//! - Update always writes `updated_ts`; delete is a hard delete.

use super::query::{push_pagination, SetClause, WhereClause};
use super::{ensure_table_ready, parse_row_status, unix_now, RepoResult};
use crate::db::schema::FOLDER_TABLE;
use crate::model::folder::{CreateFolder, DeleteFolder, FindFolder, Folder, UpdateFolder};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};

const FOLDER_COLUMNS: &[&str] = &[
    "id",
    "uid",
    "creator_id",
    "area_id",
    "created_ts",
    "updated_ts",
    "row_status",
    "name",
    "description",
    "parent_id",
];

const FOLDER_RETURNING: &str = concat!(
    "id, uid, creator_id, area_id, created_ts, updated_ts, ",
    "row_status, name, description, parent_id"
);

/// Repository interface for folder persistence.
pub trait FolderRepository {
    fn create_folder(&self, create: &CreateFolder) -> RepoResult<Folder>;
    fn list_folders(&self, find: &FindFolder) -> RepoResult<Vec<Folder>>;
    fn update_folder(&self, update: &UpdateFolder) -> RepoResult<()>;
    fn delete_folder(&self, delete: &DeleteFolder) -> RepoResult<()>;
}

/// SQLite-backed folder repository.
pub struct SqliteFolderRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFolderRepository<'conn> {
    /// Creates repository from a bootstrapped connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, FOLDER_TABLE, FOLDER_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl FolderRepository for SqliteFolderRepository<'_> {
    fn create_folder(&self, create: &CreateFolder) -> RepoResult<Folder> {
        let mut columns = vec!["uid", "creator_id", "area_id", "name", "description"];
        let mut values = vec![
            Value::Text(create.uid.clone()),
            Value::Integer(i64::from(create.creator_id)),
            Value::Integer(i64::from(create.area_id)),
            Value::Text(create.name.clone()),
            Value::Text(create.description.clone()),
        ];
        if let Some(parent_id) = create.parent_id {
            columns.push("parent_id");
            values.push(Value::Integer(i64::from(parent_id)));
        }

        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT INTO folder ({}) VALUES ({placeholders}) RETURNING {FOLDER_RETURNING};",
            columns.join(", ")
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(values))?;
        match rows.next()? {
            Some(row) => parse_folder_row(row),
            None => Err(rusqlite::Error::QueryReturnedNoRows.into()),
        }
    }

    fn list_folders(&self, find: &FindFolder) -> RepoResult<Vec<Folder>> {
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
            .eq("area_id", find.area_id)
            .parent("parent_id", find.parent_id);
        let (where_sql, mut values) = filter.into_parts();

        let mut sql = format!(
            "SELECT {FOLDER_RETURNING} FROM folder{where_sql} ORDER BY created_ts DESC, id DESC"
        );
        push_pagination(&mut sql, &mut values, find.limit, find.offset);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(values))?;
        let mut folders = Vec::new();
        while let Some(row) = rows.next()? {
            folders.push(parse_folder_row(row)?);
        }
        Ok(folders)
    }

    fn update_folder(&self, update: &UpdateFolder) -> RepoResult<()> {
        let mut set = SetClause::new();
        set.set("updated_ts", Some(update.updated_ts.unwrap_or_else(unix_now)))
            .set(
                "row_status",
                update.row_status.map(|status| status.as_db_str().to_string()),
            )
            .set("area_id", update.area_id)
            .set("name", update.name.clone())
            .set("description", update.description.clone())
            .parent("parent_id", update.parent)
            .set("uid", update.uid.clone());
        let (set_sql, mut values) = set.into_parts();
        values.push(Value::Integer(i64::from(update.id)));

        self.conn.execute(
            &format!("UPDATE folder SET {set_sql} WHERE id = ?;"),
            params_from_iter(values),
        )?;
        Ok(())
    }

    fn delete_folder(&self, delete: &DeleteFolder) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM folder WHERE id = ?1;", [delete.id])?;
        Ok(())
    }
}

fn parse_folder_row(row: &Row<'_>) -> RepoResult<Folder> {
    let row_status_text: String = row.get("row_status")?;
    Ok(Folder {
        id: row.get("id")?,
        uid: row.get("uid")?,
        row_status: parse_row_status(&row_status_text, "folder.row_status")?,
        creator_id: row.get("creator_id")?,
        area_id: row.get("area_id")?,
        created_ts: row.get("created_ts")?,
        updated_ts: row.get("updated_ts")?,
        name: row.get("name")?,
        description: row.get("description")?,
        parent_id: row.get("parent_id")?,
    })
}
