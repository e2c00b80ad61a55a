//! Folder use-case service.
//!
//! # Invariants
//! - Folder UIDs follow the same shape rules as area UIDs.
//! - `area_id` must be positive on create and when supplied on update.

use super::{ensure_valid_parent_change, ensure_valid_parent_id, ServiceResult};
use crate::model::folder::{CreateFolder, DeleteFolder, FindFolder, Folder, UpdateFolder};
use crate::model::uid::{ensure_valid_uid, RegexUidValidator, UidValidator, ValidationError};
use crate::repo::folder_repo::FolderRepository;
use log::{info, warn};

/// Folder service facade.
pub struct FolderService<R: FolderRepository, V: UidValidator = RegexUidValidator> {
    repo: R,
    uid_validator: V,
}

impl<R: FolderRepository> FolderService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_validator(repo, RegexUidValidator::default())
    }
}

impl<R: FolderRepository, V: UidValidator> FolderService<R, V> {
    pub fn with_validator(repo: R, uid_validator: V) -> Self {
        Self {
            repo,
            uid_validator,
        }
    }

    /// Creates one folder and returns the stored row.
    ///
    /// # Errors
    /// - `ServiceError::Validation` when `uid` has the wrong shape, or when
    ///   `area_id` or `parent_id` is not a positive id. Area existence is not
    ///   checked.
    /// - `ServiceError::Store` for any store failure, e.g. a duplicate `uid`.
    pub fn create(&self, create: &CreateFolder) -> ServiceResult<Folder> {
        if let Err(err) = self.validate_create(create) {
            warn!(
                "event=folder_create module=service status=rejected error_code={}",
                err.code()
            );
            return Err(err.into());
        }

        let folder = self.repo.create_folder(create)?;
        info!(
            "event=folder_create module=service status=ok id={} area_id={} has_parent={}",
            folder.id,
            folder.area_id,
            folder.parent_id.is_some()
        );
        Ok(folder)
    }

    /// Lists folders matching `find`, newest first. Empty when nothing matches.
    pub fn list(&self, find: &FindFolder) -> ServiceResult<Vec<Folder>> {
        Ok(self.repo.list_folders(find)?)
    }

    /// Returns the first folder matching `find`, or `None`.
    pub fn get(&self, find: &FindFolder) -> ServiceResult<Option<Folder>> {
        Ok(self.list(find)?.into_iter().next())
    }

    /// Applies a partial update. Callers re-fetch to observe the new state.
    ///
    /// # Errors
    /// - `ServiceError::Validation` for a malformed `uid`, a non-positive
    ///   `area_id`, or `ParentChange::Set` with a non-positive id.
    pub fn update(&self, update: &UpdateFolder) -> ServiceResult<()> {
        if let Err(err) = self.validate_update(update) {
            warn!(
                "event=folder_update module=service status=rejected id={} error_code={}",
                update.id,
                err.code()
            );
            return Err(err.into());
        }

        self.repo.update_folder(update)?;
        info!(
            "event=folder_update module=service status=ok id={}",
            update.id
        );
        Ok(())
    }

    /// Hard-deletes a folder. Missing ids succeed with no effect.
    pub fn delete(&self, delete: &DeleteFolder) -> ServiceResult<()> {
        self.repo.delete_folder(delete)?;
        info!(
            "event=folder_delete module=service status=ok id={}",
            delete.id
        );
        Ok(())
    }

    fn validate_create(&self, create: &CreateFolder) -> Result<(), ValidationError> {
        ensure_valid_uid(&self.uid_validator, &create.uid)?;
        ensure_valid_area_id(create.area_id)?;
        ensure_valid_parent_id(create.parent_id)
    }

    fn validate_update(&self, update: &UpdateFolder) -> Result<(), ValidationError> {
        if let Some(uid) = update.uid.as_deref() {
            ensure_valid_uid(&self.uid_validator, uid)?;
        }
        if let Some(area_id) = update.area_id {
            ensure_valid_area_id(area_id)?;
        }
        ensure_valid_parent_change(update.parent)
    }
}

fn ensure_valid_area_id(area_id: i32) -> Result<(), ValidationError> {
    if area_id <= 0 {
        return Err(ValidationError::InvalidAreaId(area_id));
    }
    Ok(())
}
