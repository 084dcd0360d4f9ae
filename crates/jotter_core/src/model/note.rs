//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record and its kind discriminator.
//! - Validate kind/body agreement before notes cross the write boundary.
//!
//! # Invariants
//! - `id` is unique across the collection and never reassigned.
//! - `created_at` is set once at creation and is the sole sort key.
//! - A LIST-kind `body` is always a decodable task-list encoding; a
//!   TEXT-kind `body` is never decoded.
//!
//! # See also
//! - `codec::task_list` for the LIST body encoding.

use crate::codec::task_list::decode_task_list;
use crate::codec::CodecError;
use crate::model::color::NoteColor;
use crate::model::task::TaskItem;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable note identifier.
pub type NoteId = i64;

/// Discriminator controlling how a note body is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoteKind {
    /// Free-form text body.
    #[default]
    Text,
    /// Body is an encoded ordered sequence of `TaskItem`.
    List,
}

impl NoteKind {
    /// Persisted label (`TEXT` / `LIST`).
    pub fn as_str(self) -> &'static str {
        match self {
            NoteKind::Text => "TEXT",
            NoteKind::List => "LIST",
        }
    }

    /// Strict, case-insensitive parse.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "TEXT" => Some(NoteKind::Text),
            "LIST" => Some(NoteKind::List),
            _ => None,
        }
    }

    /// Parse used on the read path: unknown labels become `Text`.
    ///
    /// `Text` is the only safe fallback because its body is never decoded.
    pub fn parse_or_text(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            warn!(
                "event=note_kind module=model status=fallback value_len={} fallback=TEXT",
                value.len()
            );
            NoteKind::Text
        })
    }
}

impl Display for NoteKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NoteKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NoteKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_or_text(&raw))
    }
}

/// Validation failures for notes entering the write path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// LIST-kind note whose body is not a valid task-list encoding.
    MalformedTaskList { id: NoteId, reason: String },
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedTaskList { id, reason } => {
                write!(f, "note {id} has kind LIST but its body is not a task list: {reason}")
            }
        }
    }
}

impl Error for NoteValidationError {}

/// Persisted note record.
///
/// Field names on the wire match the previously persisted collection format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    #[serde(default)]
    pub title: String,
    /// Raw text (TEXT) or encoded task list (LIST).
    #[serde(rename = "content", default)]
    pub body: String,
    #[serde(rename = "type", default)]
    pub kind: NoteKind,
    /// Creation time in epoch milliseconds.
    #[serde(rename = "timestamp", default)]
    pub created_at: i64,
    /// Packed ARGB value. Kept verbatim; resolve with [`Note::resolved_color`].
    #[serde(default = "default_color_argb")]
    pub color: i32,
    #[serde(rename = "isArchived", default)]
    pub archived: bool,
    #[serde(rename = "isPinned", default)]
    pub pinned: bool,
    #[serde(rename = "isLocked", default)]
    pub locked: bool,
    /// Free-form category; empty means uncategorized.
    #[serde(default)]
    pub category: String,
}

impl Note {
    /// Creates an empty note of `kind` with the kind's default color.
    pub fn new(id: NoteId, kind: NoteKind, created_at: i64) -> Self {
        Self {
            id,
            title: String::new(),
            body: String::new(),
            kind,
            created_at,
            color: default_color_for(kind).to_argb(),
            archived: false,
            pinned: false,
            locked: false,
            category: String::new(),
        }
    }

    /// Palette entry for the stored color value.
    pub fn resolved_color(&self) -> NoteColor {
        NoteColor::from_argb(self.color)
    }

    /// Decodes the checklist of a LIST-kind note.
    ///
    /// TEXT-kind notes have no tasks; their body is never handed to the codec.
    pub fn tasks(&self) -> Result<Vec<TaskItem>, CodecError> {
        match self.kind {
            NoteKind::Text => Ok(Vec::new()),
            NoteKind::List => decode_task_list(&self.body),
        }
    }

    /// Checks kind/body agreement.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        self.tasks()
            .map(|_| ())
            .map_err(|err| NoteValidationError::MalformedTaskList {
                id: self.id,
                reason: err.to_string(),
            })
    }

    /// Returns whether the note has a non-blank category.
    pub fn is_categorized(&self) -> bool {
        !self.category.trim().is_empty()
    }
}

/// Color assigned to freshly created notes of `kind`.
pub fn default_color_for(kind: NoteKind) -> NoteColor {
    match kind {
        NoteKind::Text => NoteColor::Default,
        NoteKind::List => NoteColor::PurpleLight,
    }
}

fn default_color_argb() -> i32 {
    NoteColor::Default.to_argb()
}
