//! In-memory editing session for one note.
//!
//! # Responsibility
//! - Hold transient title/text/checklist edits until commit.
//! - Turn the session state into a persistable `NoteDraft`.
//!
//! # Invariants
//! - A LIST session always starts with at least one row to type into.
//! - Switching kind discards the previous kind's content; nothing is
//!   carried over.
//! - Rows are addressed by task id, never by position.
//! - Committing drops blank rows and keeps the rest in order.

use crate::codec::{encode_task_list, CodecResult};
use crate::model::color::NoteColor;
use crate::model::note::{default_color_for, Note, NoteId, NoteKind};
use crate::model::task::TaskItem;
use log::warn;

/// Persistable result of a committed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    /// Literal text (TEXT) or encoded non-blank rows (LIST).
    pub body: String,
    pub kind: NoteKind,
    /// Packed ARGB value.
    pub color: i32,
    pub category: String,
}

impl NoteDraft {
    /// Applies the draft onto `base`, keeping identity, creation time and
    /// flags.
    pub fn apply_to(&self, base: &Note) -> Note {
        Note {
            title: self.title.clone(),
            body: self.body.clone(),
            kind: self.kind,
            color: self.color,
            category: self.category.clone(),
            ..base.clone()
        }
    }
}

/// Editing state for a new or existing note.
#[derive(Debug, Clone)]
pub struct EditSession {
    base_id: Option<NoteId>,
    title: String,
    category: String,
    color: NoteColor,
    kind: NoteKind,
    text: String,
    tasks: Vec<TaskItem>,
}

impl EditSession {
    /// Starts a session for a note that does not exist yet.
    pub fn new(kind: NoteKind) -> Self {
        Self {
            base_id: None,
            title: String::new(),
            category: String::new(),
            color: default_color_for(kind),
            kind,
            text: String::new(),
            tasks: seed_tasks(kind),
        }
    }

    /// Starts a session from a persisted note.
    ///
    /// A LIST body that fails to decode, or decodes to no rows, is replaced
    /// by a single blank row. TEXT bodies are never decoded.
    pub fn from_note(note: &Note) -> Self {
        let (text, tasks) = match note.kind {
            NoteKind::Text => (note.body.clone(), Vec::new()),
            NoteKind::List => {
                let tasks = note.tasks().unwrap_or_else(|err| {
                    warn!(
                        "event=task_list_decode module=service status=fallback note_id={} error={}",
                        note.id, err
                    );
                    Vec::new()
                });
                if tasks.is_empty() {
                    (String::new(), vec![TaskItem::blank()])
                } else {
                    (String::new(), tasks)
                }
            }
        };

        Self {
            base_id: Some(note.id),
            title: note.title.clone(),
            category: note.category.clone(),
            color: note.resolved_color(),
            kind: note.kind,
            text,
            tasks,
        }
    }

    /// Id of the note being edited, `None` for a new note.
    pub fn base_id(&self) -> Option<NoteId> {
        self.base_id
    }

    pub fn kind(&self) -> NoteKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn color(&self) -> NoteColor {
        self.color
    }

    /// Current free text (always empty for LIST sessions).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current rows in stored order (always empty for TEXT sessions).
    pub fn tasks(&self) -> &[TaskItem] {
        &self.tasks
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_color(&mut self, color: NoteColor) {
        self.color = color;
    }

    /// Replaces the free text. Ignored for LIST sessions.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if self.kind == NoteKind::Text {
            self.text = text.into();
        }
    }

    /// Switches the session kind.
    ///
    /// Destructive: in-progress content of the old kind is dropped and the
    /// new kind is re-seeded (LIST gets one blank row, TEXT an empty string).
    /// Selecting the current kind is a no-op.
    pub fn set_kind(&mut self, kind: NoteKind) {
        if self.kind == kind {
            return;
        }
        self.kind = kind;
        self.text.clear();
        self.tasks = seed_tasks(kind);
    }

    /// Appends a blank row and returns its id. `None` for TEXT sessions.
    pub fn add_task(&mut self) -> Option<String> {
        if self.kind != NoteKind::List {
            return None;
        }
        let task = TaskItem::blank();
        let id = task.id.clone();
        self.tasks.push(task);
        Some(id)
    }

    /// Replaces the text of the row with `id`. Returns whether it existed.
    pub fn update_task_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Sets the done flag of the row with `id`. Returns whether it existed.
    pub fn set_task_done(&mut self, id: &str, done: bool) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.done = done;
                true
            }
            None => false,
        }
    }

    /// Removes the row with `id`. Returns whether it existed.
    pub fn remove_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Produces the persistable draft for the current state.
    pub fn commit(&self) -> CodecResult<NoteDraft> {
        let body = match self.kind {
            NoteKind::Text => self.text.clone(),
            NoteKind::List => {
                let kept: Vec<TaskItem> = self
                    .tasks
                    .iter()
                    .filter(|task| !task.is_blank())
                    .cloned()
                    .collect();
                encode_task_list(&kept)?
            }
        };

        Ok(NoteDraft {
            title: self.title.clone(),
            body,
            kind: self.kind,
            color: self.color.to_argb(),
            category: self.category.clone(),
        })
    }

    fn task_mut(&mut self, id: &str) -> Option<&mut TaskItem> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}

fn seed_tasks(kind: NoteKind) -> Vec<TaskItem> {
    match kind {
        NoteKind::Text => Vec::new(),
        NoteKind::List => vec![TaskItem::blank()],
    }
}
