//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `organizer_core` linkage against a throwaway in-memory store.
//! - Keep output deterministic for quick local sanity checks.

use organizer_core::{
    open_db_in_memory, AreaService, CreateArea, CreateFolder, FindArea, FindFolder,
    FolderService, SqliteAreaRepository, SqliteFolderRepository,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_smoke module=cli status=error error={err}");
            eprintln!("organizer_core smoke run failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let conn = open_db_in_memory()?;
    let areas = AreaService::new(SqliteAreaRepository::try_new(&conn)?);
    let folders = FolderService::new(SqliteFolderRepository::try_new(&conn)?);

    let area = areas.create(&CreateArea {
        uid: "smoke".to_string(),
        creator_id: 1,
        name: "Smoke".to_string(),
        ..CreateArea::default()
    })?;
    folders.create(&CreateFolder {
        uid: "smoke-inbox".to_string(),
        creator_id: 1,
        area_id: area.id,
        name: "Inbox".to_string(),
        ..CreateFolder::default()
    })?;

    println!("organizer_core version={}", organizer_core::core_version());
    println!(
        "organizer_core areas={}",
        areas.list(&FindArea::roots())?.len()
    );
    println!(
        "organizer_core folders={}",
        folders.list(&FindFolder::in_area(area.id))?.len()
    );
    Ok(())
}
