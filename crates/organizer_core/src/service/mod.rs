//! Validating entry points above the repositories.
//!
//! # Responsibility
//! - Reject malformed input before it reaches storage.
//! - Derive convenience reads (`get`) from repository listing.
//!
//! # Invariants
//! - Services own no state beyond their repository and UID validator.
//! - Repository errors pass through unchanged inside `ServiceError::Store`.

pub mod area_service;
pub mod folder_service;

use crate::model::uid::ValidationError;
use crate::model::ParentChange;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors from organization service operations.
#[derive(Debug)]
pub enum ServiceError {
    /// Input rejected before any store interaction.
    Validation(ValidationError),
    /// Backing-store failure, unchanged.
    Store(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Store(value)
    }
}

/// Stored parents are positive row ids; `None` means root.
fn ensure_valid_parent_id(parent_id: Option<i32>) -> Result<(), ValidationError> {
    match parent_id {
        Some(id) if id <= 0 => Err(ValidationError::InvalidParentId(id)),
        _ => Ok(()),
    }
}

fn ensure_valid_parent_change(change: Option<ParentChange>) -> Result<(), ValidationError> {
    match change {
        Some(ParentChange::Set(id)) => ensure_valid_parent_id(Some(id)),
        Some(ParentChange::Clear) | None => Ok(()),
    }
}
