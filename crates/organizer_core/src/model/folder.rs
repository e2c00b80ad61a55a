//! Folder domain model.
//!
//! Folders share the area shape and add a required owning `area_id`.
//! `parent_id` points at another folder; whether that folder lives in the
//! same area is not enforced at this layer.

use super::row_status::RowStatus;
use super::{ParentChange, ROOT_PARENT_ID};
use serde::{Deserialize, Serialize};

/// Persisted organizational unit scoped to one area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i32,
    pub uid: String,
    pub row_status: RowStatus,
    pub creator_id: i32,
    /// Owning area. Never null.
    pub area_id: i32,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub name: String,
    pub description: String,
    /// Parent folder id. `None` means root-level folder.
    pub parent_id: Option<i32>,
}

/// Input for creating a folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateFolder {
    pub uid: String,
    pub creator_id: i32,
    pub area_id: i32,
    pub name: String,
    pub description: String,
    pub parent_id: Option<i32>,
}

/// Filter options for listing folders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindFolder {
    pub id: Option<i32>,
    pub uid: Option<String>,
    pub id_list: Vec<i32>,
    pub uid_list: Vec<String>,
    pub row_status: Option<RowStatus>,
    pub creator_id: Option<i32>,
    pub area_id: Option<i32>,
    /// `Some(ROOT_PARENT_ID)` selects root-level folders only.
    pub parent_id: Option<i32>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl FindFolder {
    pub fn by_id(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_uid(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
            ..Self::default()
        }
    }

    /// All folders owned by one area, at any depth.
    pub fn in_area(area_id: i32) -> Self {
        Self {
            area_id: Some(area_id),
            ..Self::default()
        }
    }

    /// Root-level folders of one area.
    pub fn area_roots(area_id: i32) -> Self {
        Self {
            area_id: Some(area_id),
            parent_id: Some(ROOT_PARENT_ID),
            ..Self::default()
        }
    }

    pub fn children_of(parent_id: i32) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::default()
        }
    }
}

/// Partial update for one folder. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateFolder {
    pub id: i32,
    pub uid: Option<String>,
    pub updated_ts: Option<i64>,
    pub row_status: Option<RowStatus>,
    /// Moves the folder to another area.
    pub area_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent: Option<ParentChange>,
}

impl UpdateFolder {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// Hard-delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteFolder {
    pub id: i32,
}
