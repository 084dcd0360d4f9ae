//! Checklist row embedded in a LIST-kind note body.
//!
//! # Invariants
//! - `id` is generated once and never changes for the row lifetime.
//! - Rows have no existence outside their parent note's encoded body.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One checklist entry.
///
/// Serialized with the field names used by previously persisted bodies
/// (`id`, `text`, `isChecked`). Missing fields take their defaults on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    /// Opaque stable identity.
    #[serde(default = "generate_task_id")]
    pub id: String,
    /// Row text. May be blank while editing; blank rows are dropped on commit.
    #[serde(default)]
    pub text: String,
    /// Completion flag.
    #[serde(rename = "isChecked", default)]
    pub done: bool,
}

impl TaskItem {
    /// Creates an undone task with a freshly generated id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: generate_task_id(),
            text: text.into(),
            done: false,
        }
    }

    /// Creates a blank placeholder row for editing contexts.
    pub fn blank() -> Self {
        Self::new(String::new())
    }

    /// Returns whether the row carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

fn generate_task_id() -> String {
    Uuid::new_v4().to_string()
}
