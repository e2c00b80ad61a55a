//! UID format capability and input validation errors.
//!
//! # Responsibility
//! - Expose the "is valid UID" predicate as an injectable capability.
//! - Provide the default regex-backed implementation.
//!
//! # Invariants
//! - Validators are pure predicates and never touch storage.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default UID shape: 1-32 ASCII alphanumerics, hyphens allowed inside.
pub const DEFAULT_UID_PATTERN: &str = r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,30}[a-zA-Z0-9])?$";

static DEFAULT_UID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_UID_PATTERN).expect("valid default uid regex"));

/// Predicate deciding whether a string has the required UID shape.
pub trait UidValidator {
    fn is_valid_uid(&self, uid: &str) -> bool;
}

impl<F> UidValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid_uid(&self, uid: &str) -> bool {
        self(uid)
    }
}

/// Regex-backed UID validator.
#[derive(Debug, Clone)]
pub struct RegexUidValidator {
    pattern: Regex,
}

impl RegexUidValidator {
    /// Builds a validator from a custom pattern.
    ///
    /// # Errors
    /// - Returns `regex::Error` when `pattern` does not compile.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Default for RegexUidValidator {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_UID_RE.clone(),
        }
    }
}

impl UidValidator for RegexUidValidator {
    fn is_valid_uid(&self, uid: &str) -> bool {
        self.pattern.is_match(uid)
    }
}

/// Input rejected before any store interaction.
///
/// Besides the UID shape, write paths reject non-positive row references:
/// a parent must be a positive id (`None` means root) and a folder's owning
/// area must be a positive id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// UID does not satisfy the injected format predicate.
    InvalidUid(String),
    /// Parent reference must point at a positive row id.
    InvalidParentId(i32),
    /// Folder owner must be a positive area id.
    InvalidAreaId(i32),
}

impl ValidationError {
    /// Stable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUid(_) => "invalid_uid",
            Self::InvalidParentId(_) => "invalid_parent_id",
            Self::InvalidAreaId(_) => "invalid_area_id",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUid(uid) => write!(f, "invalid uid `{uid}`"),
            Self::InvalidParentId(id) => write!(f, "invalid parent id {id}"),
            Self::InvalidAreaId(id) => write!(f, "invalid area id {id}"),
        }
    }
}

impl Error for ValidationError {}

/// Returns `Ok(())` when `uid` satisfies `validator`.
pub fn ensure_valid_uid<V: UidValidator + ?Sized>(
    validator: &V,
    uid: &str,
) -> Result<(), ValidationError> {
    if validator.is_valid_uid(uid) {
        Ok(())
    } else {
        Err(ValidationError::InvalidUid(uid.to_string()))
    }
}
