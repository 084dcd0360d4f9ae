//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the note create/update/delete/list contract via FRB.
//! - Flatten core types into plain DTOs with string/number fields.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Calls are serialized by a process-wide lock so the collection-replace
//!   store only ever sees one writer.
//! - Save failures are reported with `ok = false`, never swallowed.

use jotter_core::db::open_db;
use jotter_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, note_card,
    ping as ping_inner, CardBody, Note, NoteKind, NoteService, NoteServiceError,
    NoteStore, SqliteSlotStore, TextTone,
};
use log::error;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

const DB_FILE_NAME: &str = "jotter.sqlite3";
const DB_PATH_ENV: &str = "JOTTER_DB_PATH";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static WRITER_LOCK: Mutex<()> = Mutex::new(());

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// Returns an empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One checklist row as shown on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRowItem {
    pub id: String,
    pub text: String,
    pub done: bool,
}

/// Note record plus its card projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: i64,
    pub title: String,
    /// Raw body (text, or encoded task list for `LIST`).
    pub body: String,
    /// `TEXT` or `LIST`.
    pub kind: String,
    pub created_at: i64,
    /// Packed ARGB value as stored. `note_update` writes this field.
    pub color: i32,
    /// Palette label resolved from `color` (`DEFAULT`, `RED`, ...).
    /// Read-only: `note_update` ignores it.
    pub color_label: String,
    /// Whether text on the card should be light.
    pub light_text: bool,
    pub archived: bool,
    pub pinned: bool,
    pub locked: bool,
    pub category: String,
    /// Collapsed text preview (empty for `LIST`).
    pub preview_text: String,
    /// Leading rows, active first (empty for `TEXT`).
    pub preview_tasks: Vec<TaskRowItem>,
}

/// List response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResponse {
    /// Non-archived notes, newest first.
    pub items: Vec<NoteItem>,
    /// Human-readable message for diagnostics.
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether the call completed without error.
    pub ok: bool,
    /// Whether a note was created or changed.
    pub changed: bool,
    /// Affected note id, when one was touched.
    pub note_id: Option<i64>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn changed(message: impl Into<String>, note_id: i64) -> Self {
        Self {
            ok: true,
            changed: true,
            note_id: Some(note_id),
            message: message.into(),
        }
    }

    fn unchanged(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            changed: false,
            note_id: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            changed: false,
            note_id: None,
            message: message.into(),
        }
    }
}

/// Lists non-archived notes newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> NotesListResponse {
    match with_service(|service| Ok(service.list_notes())) {
        Ok(notes) => {
            let items = notes.iter().map(to_note_item).collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No notes.".to_string()
            } else {
                format!("Found {} note(s).", items.len())
            };
            NotesListResponse { items, message }
        }
        Err(err) => NotesListResponse {
            items: Vec::new(),
            message: format!("notes_list failed: {err}"),
        },
    }
}

/// Creates a note. `kind` must be `TEXT` or `LIST` (case-insensitive).
#[flutter_rust_bridge::frb(sync)]
pub fn note_create(title: String, body: String, kind: String) -> NoteActionResponse {
    let Some(kind) = NoteKind::parse(&kind) else {
        return NoteActionResponse::failure(format!(
            "note_create failed: unsupported kind `{}`; expected TEXT|LIST",
            kind.trim()
        ));
    };
    match with_service(|service| service.create_note(title, body, kind)) {
        Ok(note) => NoteActionResponse::changed("Note created.", note.id),
        Err(err) => NoteActionResponse::failure(format!("note_create failed: {err}")),
    }
}

/// Replaces a note by id. Unknown ids leave storage unchanged.
///
/// Derived fields (`color_label`, `light_text`, previews) are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn note_update(item: NoteItem) -> NoteActionResponse {
    let Some(kind) = NoteKind::parse(&item.kind) else {
        return NoteActionResponse::failure(format!(
            "note_update failed: unsupported kind `{}`; expected TEXT|LIST",
            item.kind.trim()
        ));
    };
    let note = from_note_item(item, kind);
    let note_id = note.id;
    match with_service(|service| service.update_note(&note)) {
        Ok(true) => NoteActionResponse::changed("Note updated.", note_id),
        Ok(false) => NoteActionResponse::unchanged("Note not found; nothing updated."),
        Err(err) => NoteActionResponse::failure(format!("note_update failed: {err}")),
    }
}

/// Deletes a note by id. Deleting an already-removed note is not an error.
#[flutter_rust_bridge::frb(sync)]
pub fn note_delete(note_id: i64) -> NoteActionResponse {
    match with_service(|service| service.delete_note(note_id)) {
        Ok(true) => NoteActionResponse::changed("Note deleted.", note_id),
        Ok(false) => NoteActionResponse::unchanged("Note already deleted."),
        Err(err) => NoteActionResponse::failure(format!("note_delete failed: {err}")),
    }
}

/// Pins or unpins a note.
#[flutter_rust_bridge::frb(sync)]
pub fn note_set_pinned(note_id: i64, pinned: bool) -> NoteActionResponse {
    flag_response(
        "note_set_pinned",
        note_id,
        with_service(|service| service.set_pinned(note_id, pinned)),
    )
}

/// Archives or restores a note.
#[flutter_rust_bridge::frb(sync)]
pub fn note_set_archived(note_id: i64, archived: bool) -> NoteActionResponse {
    flag_response(
        "note_set_archived",
        note_id,
        with_service(|service| service.set_archived(note_id, archived)),
    )
}

/// Locks or unlocks a note. Callers confirm with the user before unlocking.
#[flutter_rust_bridge::frb(sync)]
pub fn note_set_locked(note_id: i64, locked: bool) -> NoteActionResponse {
    flag_response(
        "note_set_locked",
        note_id,
        with_service(|service| service.set_locked(note_id, locked)),
    )
}

fn flag_response(
    operation: &str,
    note_id: i64,
    result: Result<bool, String>,
) -> NoteActionResponse {
    match result {
        Ok(true) => NoteActionResponse::changed("Note updated.", note_id),
        Ok(false) => NoteActionResponse::unchanged("Note not found; nothing updated."),
        Err(err) => NoteActionResponse::failure(format!("{operation} failed: {err}")),
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_service<T>(
    f: impl FnOnce(&NoteService<SqliteSlotStore<'_>>) -> Result<T, NoteServiceError>,
) -> Result<T, String> {
    let _guard = WRITER_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let conn = open_db(resolve_db_path()).map_err(|err| {
        error!("event=ffi_call module=ffi status=error error_code=db_open_failed error={err}");
        format!("DB open failed: {err}")
    })?;
    let slots =
        SqliteSlotStore::try_new(&conn).map_err(|err| format!("store init failed: {err}"))?;
    let service = NoteService::new(NoteStore::new(slots));
    f(&service).map_err(|err| err.to_string())
}

fn to_note_item(note: &Note) -> NoteItem {
    let card = note_card(note);
    let (preview_text, preview_tasks) = match card.body {
        CardBody::Text(text) => (text, Vec::new()),
        CardBody::Tasks(tasks) => (
            String::new(),
            tasks
                .into_iter()
                .map(|task| TaskRowItem {
                    id: task.id,
                    text: task.text,
                    done: task.done,
                })
                .collect(),
        ),
    };

    NoteItem {
        id: note.id,
        title: note.title.clone(),
        body: note.body.clone(),
        kind: note.kind.as_str().to_string(),
        created_at: note.created_at,
        color: note.color,
        color_label: card.color.label().to_string(),
        light_text: card.text_tone == TextTone::Light,
        archived: note.archived,
        pinned: note.pinned,
        locked: note.locked,
        category: note.category.clone(),
        preview_text,
        preview_tasks,
    }
}

fn from_note_item(item: NoteItem, kind: NoteKind) -> Note {
    Note {
        id: item.id,
        title: item.title,
        body: item.body,
        kind,
        created_at: item.created_at,
        color: item.color,
        archived: item.archived,
        pinned: item.pinned,
        locked: item.locked,
        category: item.category,
    }
}
