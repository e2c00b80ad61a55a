//! Domain model for the organization hierarchy.
//!
//! # Responsibility
//! - Define the canonical `Area` and `Folder` records plus their request shapes.
//! - Own the UID format capability and input validation errors.
//!
//! # Invariants
//! - `id` is assigned by the store and never mutated by callers.
//! - A stored `parent_id` of `None` means root; `0` is never a stored parent.
//! - The `0`-means-root convention is confined to `Find*` query structs.

pub mod area;
pub mod folder;
pub mod row_status;
pub mod uid;

/// Parent filter value that selects root-level rows only.
pub const ROOT_PARENT_ID: i32 = 0;

/// Parent reference change requested by an update.
///
/// Keeps "clear the parent" distinct from "point at another row", so no
/// sentinel integer ever reaches the stored column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentChange {
    /// Re-parent under the row with this id.
    Set(i32),
    /// Detach from the current parent and become a root.
    Clear,
}
