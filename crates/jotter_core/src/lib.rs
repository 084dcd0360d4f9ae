//! Core domain logic for Jotter notes.
//! This crate is the single source of truth for note and checklist invariants.

pub mod codec;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use codec::{decode_task_list, encode_task_list, CodecError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::color::{NoteColor, TextTone};
pub use model::note::{Note, NoteId, NoteKind, NoteValidationError};
pub use model::task::TaskItem;
pub use repo::note_store::{next_id, NoteStore, NOTES_SLOT_KEY};
pub use repo::slot_store::{SlotStore, SqliteSlotStore, StoreError, StoreResult};
pub use service::edit_session::{EditSession, NoteDraft};
pub use service::note_service::{
    ArchiveFilter, NoteListQuery, NoteService, NoteServiceError, ServiceResult,
};
pub use view::card::{note_card, resolve_color, text_preview, CardBody, NoteCard};
pub use view::ordering::{order_newest_first, partition_tasks, preview_tasks, TaskPartition};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
