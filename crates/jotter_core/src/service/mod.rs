//! Core use-case services.
//!
//! # Responsibility
//! - Expose the create/update/delete/list contract consumed by presentation.
//! - Host the editing-session logic that feeds that contract.

pub mod edit_session;
pub mod note_service;
