//! Area use-case service.
//!
//! # Responsibility
//! - Validate UIDs and parent changes before delegating to the repository.
//! - Provide `get` as "first row of `list`".
//!
//! # Invariants
//! - Validation failures never touch the store.
//! - `get` assumes no uniqueness beyond the store's own constraints.

use super::{ensure_valid_parent_change, ensure_valid_parent_id, ServiceResult};
use crate::model::area::{Area, CreateArea, DeleteArea, FindArea, UpdateArea};
use crate::model::uid::{ensure_valid_uid, RegexUidValidator, UidValidator, ValidationError};
use crate::repo::area_repo::AreaRepository;
use log::{info, warn};

/// Area service facade.
pub struct AreaService<R: AreaRepository, V: UidValidator = RegexUidValidator> {
    repo: R,
    uid_validator: V,
}

impl<R: AreaRepository> AreaService<R> {
    /// Creates service with the default UID shape.
    pub fn new(repo: R) -> Self {
        Self::with_validator(repo, RegexUidValidator::default())
    }
}

impl<R: AreaRepository, V: UidValidator> AreaService<R, V> {
    /// Creates service with an injected UID validator.
    pub fn with_validator(repo: R, uid_validator: V) -> Self {
        Self {
            repo,
            uid_validator,
        }
    }

    /// Creates one area and returns the stored row.
    ///
    /// # Errors
    /// - `ServiceError::Validation` when `uid` has the wrong shape or
    ///   `parent_id` is not a positive id.
    /// - `ServiceError::Store` for any store failure, e.g. a duplicate `uid`.
    pub fn create(&self, create: &CreateArea) -> ServiceResult<Area> {
        if let Err(err) = self.validate_create(create) {
            warn!(
                "event=area_create module=service status=rejected error_code={}",
                err.code()
            );
            return Err(err.into());
        }

        let area = self.repo.create_area(create)?;
        info!(
            "event=area_create module=service status=ok id={} has_parent={}",
            area.id,
            area.parent_id.is_some()
        );
        Ok(area)
    }

    /// Lists areas matching `find`, newest first. Empty when nothing matches.
    pub fn list(&self, find: &FindArea) -> ServiceResult<Vec<Area>> {
        Ok(self.repo.list_areas(find)?)
    }

    /// Returns the first area matching `find`, or `None`.
    pub fn get(&self, find: &FindArea) -> ServiceResult<Option<Area>> {
        Ok(self.list(find)?.into_iter().next())
    }

    /// Applies a partial update. Callers re-fetch to observe the new state.
    pub fn update(&self, update: &UpdateArea) -> ServiceResult<()> {
        if let Err(err) = self.validate_update(update) {
            warn!(
                "event=area_update module=service status=rejected id={} error_code={}",
                update.id,
                err.code()
            );
            return Err(err.into());
        }

        self.repo.update_area(update)?;
        info!(
            "event=area_update module=service status=ok id={}",
            update.id
        );
        Ok(())
    }

    /// Hard-deletes an area. Missing ids succeed with no effect.
    pub fn delete(&self, delete: &DeleteArea) -> ServiceResult<()> {
        self.repo.delete_area(delete)?;
        info!(
            "event=area_delete module=service status=ok id={}",
            delete.id
        );
        Ok(())
    }

    fn validate_create(&self, create: &CreateArea) -> Result<(), ValidationError> {
        ensure_valid_uid(&self.uid_validator, &create.uid)?;
        ensure_valid_parent_id(create.parent_id)
    }

    fn validate_update(&self, update: &UpdateArea) -> Result<(), ValidationError> {
        if let Some(uid) = update.uid.as_deref() {
            ensure_valid_uid(&self.uid_validator, uid)?;
        }
        ensure_valid_parent_change(update.parent)
    }
}
