//! Area domain model.
//!
//! # Responsibility
//! - Define the top-level organizational unit and its request shapes.
//!
//! # Invariants
//! - `uid` is externally visible and unique across areas.
//! - `parent_id` links areas into a forest; cycles are not checked here.

use super::row_status::RowStatus;
use super::{ParentChange, ROOT_PARENT_ID};
use serde::{Deserialize, Serialize};

/// Persisted top-level organizational unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    /// Store-assigned surrogate key.
    pub id: i32,
    /// Externally visible identifier.
    pub uid: String,
    pub row_status: RowStatus,
    /// Owning principal. Immutable after creation.
    pub creator_id: i32,
    /// Unix seconds.
    pub created_ts: i64,
    /// Unix seconds.
    pub updated_ts: i64,
    pub name: String,
    pub description: String,
    /// Parent area id. `None` means root-level area.
    pub parent_id: Option<i32>,
}

/// Input for creating an area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateArea {
    pub uid: String,
    pub creator_id: i32,
    pub name: String,
    pub description: String,
    pub parent_id: Option<i32>,
}

/// Filter options for listing areas.
///
/// Absent fields add no constraint. Empty lists are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindArea {
    pub id: Option<i32>,
    pub uid: Option<String>,
    pub id_list: Vec<i32>,
    pub uid_list: Vec<String>,
    pub row_status: Option<RowStatus>,
    pub creator_id: Option<i32>,
    /// `Some(ROOT_PARENT_ID)` selects root-level areas only.
    pub parent_id: Option<i32>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl FindArea {
    /// Filter matching exactly one id.
    pub fn by_id(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Filter matching exactly one uid.
    pub fn by_uid(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
            ..Self::default()
        }
    }

    /// Filter matching root-level areas only.
    pub fn roots() -> Self {
        Self {
            parent_id: Some(ROOT_PARENT_ID),
            ..Self::default()
        }
    }

    /// Filter matching direct children of `parent_id`.
    pub fn children_of(parent_id: i32) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::default()
        }
    }
}

/// Partial update for one area. Only `Some` fields are written.
///
/// `updated_ts` is always written: the supplied value, else the current time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateArea {
    pub id: i32,
    pub uid: Option<String>,
    pub updated_ts: Option<i64>,
    pub row_status: Option<RowStatus>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent: Option<ParentChange>,
}

impl UpdateArea {
    /// Empty update targeting `id`; applying it only bumps `updated_ts`.
    pub fn new(id: i32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// Hard-delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteArea {
    pub id: i32,
}
