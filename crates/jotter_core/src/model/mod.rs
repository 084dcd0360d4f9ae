//! Domain model for notes and their embedded checklist items.
//!
//! # Responsibility
//! - Define the persisted `Note` record and its `TaskItem` rows.
//! - Own the closed `NoteKind` and `NoteColor` vocabularies.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`; every task by a stable
//!   string id. Update/delete always address by id, never by position.
//! - A note's `kind` and the shape of its `body` always agree.

pub mod color;
pub mod note;
pub mod task;
