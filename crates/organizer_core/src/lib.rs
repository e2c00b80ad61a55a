//! Persistence core for the area/folder organization hierarchy.
//!
//! Callers go through the services (`AreaService`, `FolderService`), which
//! validate input and delegate to the SQLite repositories.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{CoreConfig, DatabaseConfig, LoggingConfig};
pub use db::{open_db, open_db_in_memory, open_db_with_config, DbError};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::area::{Area, CreateArea, DeleteArea, FindArea, UpdateArea};
pub use model::folder::{CreateFolder, DeleteFolder, FindFolder, Folder, UpdateFolder};
pub use model::row_status::RowStatus;
pub use model::uid::{RegexUidValidator, UidValidator, ValidationError};
pub use model::{ParentChange, ROOT_PARENT_ID};
pub use repo::area_repo::{AreaRepository, SqliteAreaRepository};
pub use repo::folder_repo::{FolderRepository, SqliteFolderRepository};
pub use repo::{RepoError, RepoResult};
pub use service::area_service::AreaService;
pub use service::folder_service::FolderService;
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
