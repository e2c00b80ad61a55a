//! Table definitions for areas and folders.
//!
//! `parent_id` and `area_id` carry no foreign keys: hierarchy integrity and
//! cascading deletes belong to callers above this store.

use super::DbResult;
use rusqlite::Connection;

pub const AREA_TABLE: &str = "area";
pub const FOLDER_TABLE: &str = "folder";

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS area (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    uid TEXT NOT NULL UNIQUE,
    creator_id INTEGER NOT NULL,
    created_ts INTEGER NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER)),
    updated_ts INTEGER NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER)),
    row_status TEXT NOT NULL DEFAULT 'NORMAL'
        CHECK (row_status IN ('NORMAL', 'ARCHIVED')),
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    parent_id INTEGER
);

CREATE INDEX IF NOT EXISTS idx_area_creator_id ON area (creator_id);
CREATE INDEX IF NOT EXISTS idx_area_parent_id ON area (parent_id);

CREATE TABLE IF NOT EXISTS folder (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    uid TEXT NOT NULL UNIQUE,
    creator_id INTEGER NOT NULL,
    area_id INTEGER NOT NULL,
    created_ts INTEGER NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER)),
    updated_ts INTEGER NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER)),
    row_status TEXT NOT NULL DEFAULT 'NORMAL'
        CHECK (row_status IN ('NORMAL', 'ARCHIVED')),
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    parent_id INTEGER
);

CREATE INDEX IF NOT EXISTS idx_folder_area_id ON folder (area_id);
CREATE INDEX IF NOT EXISTS idx_folder_parent_id ON folder (parent_id);
";

/// Creates missing tables and indexes inside one transaction.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.commit()?;
    Ok(())
}
