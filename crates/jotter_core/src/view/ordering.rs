//! List ordering and checklist partitioning.

use crate::model::note::Note;
use crate::model::task::TaskItem;

/// Sorts notes newest first by `created_at`; equal timestamps keep their
/// incoming order.
pub fn order_newest_first(mut notes: Vec<Note>) -> Vec<Note> {
    notes.sort_by(|left, right| right.created_at.cmp(&left.created_at));
    notes
}

/// Moves pinned notes ahead of unpinned ones, preserving order within each
/// group.
pub fn pinned_first(notes: Vec<Note>) -> Vec<Note> {
    let (mut pinned, unpinned): (Vec<Note>, Vec<Note>) =
        notes.into_iter().partition(|note| note.pinned);
    pinned.extend(unpinned);
    pinned
}

/// Checklist split for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPartition {
    /// `done == false`, in stored order.
    pub active: Vec<TaskItem>,
    /// `done == true`, in stored order.
    pub completed: Vec<TaskItem>,
}

impl TaskPartition {
    /// Active rows followed by completed rows.
    pub fn into_display_order(self) -> Vec<TaskItem> {
        let mut ordered = self.active;
        ordered.extend(self.completed);
        ordered
    }
}

/// Splits tasks into active and completed groups.
pub fn partition_tasks(tasks: &[TaskItem]) -> TaskPartition {
    let (completed, active): (Vec<TaskItem>, Vec<TaskItem>) =
        tasks.iter().cloned().partition(|task| task.done);
    TaskPartition { active, completed }
}

/// First `limit` tasks in display order (active before completed).
pub fn preview_tasks(tasks: &[TaskItem], limit: usize) -> Vec<TaskItem> {
    let mut ordered = partition_tasks(tasks).into_display_order();
    ordered.truncate(limit);
    ordered
}

#[cfg(test)]
mod tests {
    use super::{order_newest_first, partition_tasks, pinned_first, preview_tasks};
    use crate::model::note::{Note, NoteKind};
    use crate::model::task::TaskItem;

    fn note(id: i64, created_at: i64) -> Note {
        Note::new(id, NoteKind::Text, created_at)
    }

    fn task(text: &str, done: bool) -> TaskItem {
        let mut task = TaskItem::new(text);
        task.done = done;
        task
    }

    #[test]
    fn newest_first_is_stable_for_equal_timestamps() {
        let ordered = order_newest_first(vec![note(1, 10), note(2, 30), note(3, 10), note(4, 20)]);
        let ids: Vec<i64> = ordered.iter().map(|note| note.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn pinned_notes_move_to_front_in_order() {
        let mut second = note(2, 0);
        second.pinned = true;
        let mut fourth = note(4, 0);
        fourth.pinned = true;
        let ordered = pinned_first(vec![note(1, 0), second, note(3, 0), fourth]);
        let ids: Vec<i64> = ordered.iter().map(|note| note.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn partition_keeps_relative_order() {
        let tasks = vec![
            task("a", true),
            task("b", false),
            task("c", true),
            task("d", false),
        ];
        let partition = partition_tasks(&tasks);
        let active: Vec<&str> = partition.active.iter().map(|t| t.text.as_str()).collect();
        let completed: Vec<&str> = partition.completed.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(active, vec!["b", "d"]);
        assert_eq!(completed, vec!["a", "c"]);
    }

    #[test]
    fn preview_caps_after_reordering() {
        let tasks = vec![
            task("done-1", true),
            task("open-1", false),
            task("done-2", true),
            task("open-2", false),
        ];
        let preview = preview_tasks(&tasks, 3);
        let texts: Vec<&str> = preview.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["open-1", "open-2", "done-1"]);
    }
}
