//! Note use-case service.
//!
//! # Responsibility
//! - Provide the CRUD contract presentation calls into.
//! - Assign ids, creation timestamps and kind-dependent default colors.
//! - Apply archive/pin/lock flag behavior and list queries.
//!
//! # Invariants
//! - `update_note` replaces every field except `id` and `created_at`.
//! - Updating or deleting an unknown id is a no-op (`Ok(false)`).
//! - Locked notes reject `update_note`/`delete_note` until unlocked through
//!   `set_locked`.
//! - Write failures are returned, never swallowed.

use crate::codec::CodecError;
use crate::model::note::{Note, NoteId, NoteKind, NoteValidationError};
use crate::repo::note_store::{next_id, NoteStore};
use crate::repo::slot_store::{SlotStore, StoreError};
use crate::service::edit_session::{EditSession, NoteDraft};
use crate::view::ordering::{order_newest_first, pinned_first};
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Note failed kind/body validation.
    Validation(NoteValidationError),
    /// Target note is locked.
    Locked(NoteId),
    /// Session content could not be encoded.
    Codec(CodecError),
    /// Persistence failure (surfaced save failure).
    Store(StoreError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Locked(id) => write!(f, "note {id} is locked"),
            Self::Codec(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "failed to save notes: {err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Locked(_) => None,
            Self::Codec(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for NoteServiceError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<CodecError> for NoteServiceError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}

impl From<StoreError> for NoteServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

pub type ServiceResult<T> = Result<T, NoteServiceError>;

/// Which notes a list query returns with respect to the archive flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArchiveFilter {
    /// Only notes that are not archived.
    #[default]
    Active,
    /// Only archived notes.
    Archived,
    /// Both.
    All,
}

/// Query options for note lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteListQuery {
    pub archive: ArchiveFilter,
    /// Moves pinned notes ahead of the rest (each group stays newest first).
    pub pinned_first: bool,
    /// Case-insensitive exact category match after trimming.
    pub category: Option<String>,
}

/// Note service facade over a `NoteStore`.
pub struct NoteService<S: SlotStore> {
    store: NoteStore<S>,
}

impl<S: SlotStore> NoteService<S> {
    /// Creates a service owning the provided store.
    pub fn new(store: NoteStore<S>) -> Self {
        Self { store }
    }

    /// Creates and persists a note with a fresh id and timestamp.
    ///
    /// The color defaults by kind: TEXT gets the default color, LIST the
    /// light purple entry.
    pub fn create_note(
        &self,
        title: impl Into<String>,
        body: impl Into<String>,
        kind: NoteKind,
    ) -> ServiceResult<Note> {
        let title = title.into();
        let body = body.into();
        self.insert_with(|id, created_at| {
            let mut note = Note::new(id, kind, created_at);
            note.title = title;
            note.body = body;
            note
        })
    }

    /// Creates and persists a note from a committed editing session.
    pub fn create_from_draft(&self, draft: &NoteDraft) -> ServiceResult<Note> {
        self.insert_with(|id, created_at| draft.apply_to(&Note::new(id, draft.kind, created_at)))
    }

    /// Replaces the stored note with the same id.
    ///
    /// Returns `Ok(false)` when no note has that id, whatever the body holds.
    /// The body is validated only once the target exists and is unlocked.
    pub fn update_note(&self, note: &Note) -> ServiceResult<bool> {
        let Some(stored) = self.store.find_by_id(note.id) else {
            warn!(
                "event=note_update module=service status=skipped reason=not_found note_id={}",
                note.id
            );
            return Ok(false);
        };
        if stored.locked {
            return Err(NoteServiceError::Locked(note.id));
        }
        note.validate()?;

        let updated = Note {
            created_at: stored.created_at,
            ..note.clone()
        };
        self.store.upsert(&updated)?;
        info!(
            "event=note_update module=service status=ok note_id={} kind={}",
            updated.id, updated.kind
        );
        Ok(true)
    }

    /// Deletes the note with `id`. Returns `Ok(false)` when it is already gone.
    pub fn delete_note(&self, id: NoteId) -> ServiceResult<bool> {
        match self.store.find_by_id(id) {
            None => {
                info!("event=note_delete module=service status=skipped reason=not_found note_id={id}");
                Ok(false)
            }
            Some(stored) if stored.locked => Err(NoteServiceError::Locked(id)),
            Some(_) => {
                let removed = self.store.remove(id)?;
                info!("event=note_delete module=service status=ok note_id={id}");
                Ok(removed)
            }
        }
    }

    /// Gets one note by id.
    pub fn get_note(&self, id: NoteId) -> Option<Note> {
        self.store.find_by_id(id)
    }

    /// Lists non-archived notes, newest first.
    pub fn list_notes(&self) -> Vec<Note> {
        self.query_notes(&NoteListQuery::default())
    }

    /// Lists archived notes, newest first.
    pub fn list_archived(&self) -> Vec<Note> {
        self.query_notes(&NoteListQuery {
            archive: ArchiveFilter::Archived,
            ..NoteListQuery::default()
        })
    }

    /// Lists notes matching `query`, newest first.
    pub fn query_notes(&self, query: &NoteListQuery) -> Vec<Note> {
        let category = query
            .category
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());

        let matching: Vec<Note> = self
            .store
            .load_all()
            .into_iter()
            .filter(|note| match query.archive {
                ArchiveFilter::Active => !note.archived,
                ArchiveFilter::Archived => note.archived,
                ArchiveFilter::All => true,
            })
            .filter(|note| {
                category.map_or(true, |wanted| {
                    note.category.trim().to_lowercase() == wanted.to_lowercase()
                })
            })
            .collect();

        let ordered = order_newest_first(matching);
        if query.pinned_first {
            pinned_first(ordered)
        } else {
            ordered
        }
    }

    /// Distinct non-blank categories, sorted case-insensitively.
    ///
    /// Categories differing only by case collapse to the first spelling seen.
    pub fn list_categories(&self) -> Vec<String> {
        let mut unique: BTreeMap<String, String> = BTreeMap::new();
        for note in self.store.load_all() {
            let trimmed = note.category.trim();
            if !trimmed.is_empty() {
                unique
                    .entry(trimmed.to_lowercase())
                    .or_insert_with(|| trimmed.to_string());
            }
        }
        unique.into_values().collect()
    }

    /// Sets the pinned flag. Returns `Ok(false)` for an unknown id.
    pub fn set_pinned(&self, id: NoteId, pinned: bool) -> ServiceResult<bool> {
        self.update_flag(id, |note| note.pinned = pinned)
    }

    /// Sets the archived flag. Returns `Ok(false)` for an unknown id.
    pub fn set_archived(&self, id: NoteId, archived: bool) -> ServiceResult<bool> {
        self.update_flag(id, |note| note.archived = archived)
    }

    /// Sets the locked flag. Returns `Ok(false)` for an unknown id.
    ///
    /// This is the only write path accepted on a locked note; callers confirm
    /// with the user before unlocking.
    pub fn set_locked(&self, id: NoteId, locked: bool) -> ServiceResult<bool> {
        self.update_flag(id, |note| note.locked = locked)
    }

    /// Commits `session` and persists it.
    ///
    /// Fresh sessions create a note. Sessions over an existing note update it
    /// and return `Ok(None)` when that note has been deleted meanwhile.
    pub fn save_session(&self, session: &EditSession) -> ServiceResult<Option<Note>> {
        let draft = session.commit()?;
        let Some(base_id) = session.base_id() else {
            return self.create_from_draft(&draft).map(Some);
        };
        let Some(base) = self.store.find_by_id(base_id) else {
            warn!(
                "event=note_update module=service status=skipped reason=not_found note_id={base_id}"
            );
            return Ok(None);
        };

        let updated = draft.apply_to(&base);
        if self.update_note(&updated)? {
            Ok(Some(updated))
        } else {
            Ok(None)
        }
    }

    fn insert_with(&self, build: impl FnOnce(NoteId, i64) -> Note) -> ServiceResult<Note> {
        let mut notes = self.store.load_all();
        let id = next_id(&notes)?;
        let note = build(id, now_epoch_ms());
        note.validate()?;

        notes.push(note.clone());
        self.store.save_all(&notes)?;
        info!(
            "event=note_create module=service status=ok note_id={} kind={}",
            note.id, note.kind
        );
        Ok(note)
    }

    fn update_flag(&self, id: NoteId, apply: impl FnOnce(&mut Note)) -> ServiceResult<bool> {
        let Some(mut note) = self.store.find_by_id(id) else {
            return Ok(false);
        };
        apply(&mut note);
        self.store.upsert(&note)?;
        Ok(true)
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or_default()
}
