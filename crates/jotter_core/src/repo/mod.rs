//! Persistence layer for the note collection.
//!
//! # Responsibility
//! - Abstract the backing key-value slot behind `SlotStore`.
//! - Own the authoritative collection read/write protocol (`NoteStore`).
//!
//! # Invariants
//! - Every write replaces the whole collection; there are no deltas.
//! - Read failures degrade to an empty collection; write failures are
//!   returned to the caller.

pub mod note_store;
pub mod slot_store;
