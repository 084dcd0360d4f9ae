//! Note Store: authoritative collection access over a backing slot.
//!
//! # Responsibility
//! - Load and replace the full note collection through the codec.
//! - Assign identities that are unique within the collection.
//!
//! # Invariants
//! - `load_all` never fails: a missing slot is an empty collection and a
//!   corrupt or unreadable slot is logged and treated as empty.
//! - `save_all` always receives the full desired collection and rejects
//!   duplicate ids.
//! - `upsert`/`remove` are read-then-write without isolation; the system
//!   assumes exactly one logical writer.

use crate::codec::{decode_notes, encode_notes};
use crate::model::note::{Note, NoteId};
use crate::repo::slot_store::{SlotStore, StoreError, StoreResult};
use log::{debug, error, info, warn};
use std::collections::HashSet;

/// Slot key holding the encoded note collection.
pub const NOTES_SLOT_KEY: &str = "notes";

/// Collection-replace store for notes.
pub struct NoteStore<S: SlotStore> {
    slots: S,
}

impl<S: SlotStore> NoteStore<S> {
    /// Creates a store over the provided slot backend.
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    /// Reads the entire persisted collection.
    pub fn load_all(&self) -> Vec<Note> {
        match self.read_collection() {
            Ok(notes) => {
                debug!(
                    "event=notes_load module=repo status=ok count={}",
                    notes.len()
                );
                notes
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=repo status=fallback fallback=empty error={}",
                    err
                );
                Vec::new()
            }
        }
    }

    /// Replaces the persisted collection with `notes`.
    ///
    /// # Errors
    /// - `StoreError::DuplicateId` when two notes share an id.
    /// - `StoreError::Sqlite` / `StoreError::Codec` when the write cannot happen.
    pub fn save_all(&self, notes: &[Note]) -> StoreResult<()> {
        let result = ensure_unique_ids(notes)
            .and_then(|()| encode_notes(notes).map_err(StoreError::from))
            .and_then(|blob| self.slots.write_slot(NOTES_SLOT_KEY, &blob));

        match &result {
            Ok(()) => info!(
                "event=notes_save module=repo status=ok count={}",
                notes.len()
            ),
            Err(err) => error!(
                "event=notes_save module=repo status=error count={} error={}",
                notes.len(),
                err
            ),
        }
        result
    }

    /// Replaces the note with the same id, or appends it when absent.
    pub fn upsert(&self, note: &Note) -> StoreResult<()> {
        let mut notes = self.load_all();
        match notes.iter_mut().find(|existing| existing.id == note.id) {
            Some(existing) => *existing = note.clone(),
            None => notes.push(note.clone()),
        }
        self.save_all(&notes)
    }

    /// Looks up one note by id.
    pub fn find_by_id(&self, id: NoteId) -> Option<Note> {
        self.load_all().into_iter().find(|note| note.id == id)
    }

    /// Removes the note with `id`.
    ///
    /// Returns `Ok(false)` without writing when no such note exists.
    pub fn remove(&self, id: NoteId) -> StoreResult<bool> {
        let mut notes = self.load_all();
        let before = notes.len();
        notes.retain(|note| note.id != id);
        if notes.len() == before {
            return Ok(false);
        }
        self.save_all(&notes)?;
        Ok(true)
    }

    fn read_collection(&self) -> StoreResult<Vec<Note>> {
        match self.slots.read_slot(NOTES_SLOT_KEY)? {
            Some(blob) => Ok(decode_notes(&blob)?),
            None => Ok(Vec::new()),
        }
    }
}

/// Returns an id strictly greater than every id in `notes` (1 when empty).
///
/// Ids start from 1 even when a legacy collection only holds negative ids.
pub fn next_id(notes: &[Note]) -> StoreResult<NoteId> {
    let max = notes.iter().map(|note| note.id).max().unwrap_or(0).max(0);
    max.checked_add(1).ok_or(StoreError::IdSpaceExhausted)
}

fn ensure_unique_ids(notes: &[Note]) -> StoreResult<()> {
    let mut seen = HashSet::with_capacity(notes.len());
    for note in notes {
        if !seen.insert(note.id) {
            return Err(StoreError::DuplicateId(note.id));
        }
    }
    Ok(())
}
