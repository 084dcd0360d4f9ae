//! Note card projection for list screens.
//!
//! # Invariants
//! - Text previews collapse line breaks to spaces and trim the ends.
//! - LIST cards show at most `CARD_TASK_LIMIT` rows, active ones first.
//! - A TEXT note body is never handed to the task-list codec.

use crate::model::color::{NoteColor, TextTone};
use crate::model::note::{Note, NoteId, NoteKind};
use crate::model::task::TaskItem;
use crate::view::ordering::preview_tasks;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum checklist rows rendered on a card.
pub const CARD_TASK_LIMIT: usize = 3;

static LINE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("valid line break regex"));

/// Card body variant matching the note kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody {
    /// Single-line text preview.
    Text(String),
    /// Leading checklist rows in display order.
    Tasks(Vec<TaskItem>),
}

/// Everything a list row needs to render one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    /// Palette entry resolved from the stored value.
    pub color: NoteColor,
    /// Text tone readable on `color`.
    pub text_tone: TextTone,
    pub body: CardBody,
    /// `None` when the note is uncategorized.
    pub category: Option<String>,
}

/// Builds the card projection for one note.
pub fn note_card(note: &Note) -> NoteCard {
    let color = resolve_color(note.color);
    let body = match note.kind {
        NoteKind::Text => CardBody::Text(text_preview(&note.body)),
        NoteKind::List => {
            let tasks = note.tasks().unwrap_or_else(|err| {
                debug!(
                    "event=note_card module=view status=fallback note_id={} error={}",
                    note.id, err
                );
                Vec::new()
            });
            CardBody::Tasks(preview_tasks(&tasks, CARD_TASK_LIMIT))
        }
    };

    NoteCard {
        id: note.id,
        title: note.title.clone(),
        color,
        text_tone: color.text_tone(),
        body,
        category: note
            .is_categorized()
            .then(|| note.category.trim().to_string()),
    }
}

/// Resolves a stored color; unknown values map to the default entry.
pub fn resolve_color(argb: i32) -> NoteColor {
    NoteColor::from_argb(argb)
}

/// Collapses line breaks to spaces and trims surrounding whitespace.
pub fn text_preview(body: &str) -> String {
    LINE_BREAK_RE.replace_all(body, " ").trim().to_string()
}

/// Caps `text` at `max_chars` characters, marking the cut with `...`.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    let mut truncated: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}
