//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jotter_core` linkage.
//! - Run one in-memory create/list round trip through the note service.

use jotter_core::db::open_db_in_memory;
use jotter_core::{NoteKind, NoteService, NoteStore, SqliteSlotStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("jotter_core ping={}", jotter_core::ping());
    println!("jotter_core version={}", jotter_core::core_version());

    match round_trip() {
        Ok(count) => {
            println!("jotter_core round_trip notes={count}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("jotter_core round_trip failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn round_trip() -> Result<usize, Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let service = NoteService::new(NoteStore::new(SqliteSlotStore::try_new(&conn)?));
    service.create_note("Groceries", "milk\neggs", NoteKind::Text)?;
    service.create_note("Chores", "", NoteKind::List)?;
    Ok(service.list_notes().len())
}
