use jotter_core::db::open_db_in_memory;
use jotter_core::{
    decode_task_list, encode_task_list, partition_tasks, EditSession, Note, NoteColor, NoteKind,
    NoteService, NoteStore, SqliteSlotStore, TaskItem,
};
use rusqlite::Connection;

fn service(conn: &Connection) -> NoteService<SqliteSlotStore<'_>> {
    NoteService::new(NoteStore::new(SqliteSlotStore::try_new(conn).unwrap()))
}

fn list_note(body: &str) -> Note {
    let mut note = Note::new(3, NoteKind::List, 10);
    note.body = body.to_string();
    note
}

#[test]
fn new_list_session_starts_with_one_blank_row() {
    let session = EditSession::new(NoteKind::List);
    assert_eq!(session.tasks().len(), 1);
    assert!(session.tasks()[0].is_blank());
    assert_eq!(session.color(), NoteColor::PurpleLight);
    assert_eq!(session.base_id(), None);

    let text = EditSession::new(NoteKind::Text);
    assert!(text.tasks().is_empty());
    assert_eq!(text.text(), "");
}

#[test]
fn list_session_decodes_persisted_rows() {
    let tasks = vec![TaskItem::new("buy milk"), TaskItem::new("pay rent")];
    let session = EditSession::from_note(&list_note(&encode_task_list(&tasks).unwrap()));
    assert_eq!(session.tasks(), tasks.as_slice());
    assert_eq!(session.base_id(), Some(3));
}

#[test]
fn malformed_or_empty_list_body_seeds_a_single_blank_row() {
    for body in ["", "[]", "milk\neggs", r#"{"oops":true}"#] {
        let session = EditSession::from_note(&list_note(body));
        assert_eq!(session.tasks().len(), 1, "body {body:?}");
        assert!(session.tasks()[0].is_blank());
    }
}

#[test]
fn text_session_keeps_body_verbatim_without_decoding() {
    let mut note = Note::new(1, NoteKind::Text, 0);
    note.body = r#"[{"id":"x","text":"looks like tasks"}]"#.to_string();
    let session = EditSession::from_note(&note);
    assert_eq!(session.text(), note.body);
    assert!(session.tasks().is_empty());
}

#[test]
fn switching_kind_discards_content_and_reseeds() {
    let mut session = EditSession::new(NoteKind::Text);
    session.set_text("milk\neggs");

    session.set_kind(NoteKind::List);
    assert_eq!(session.text(), "");
    assert_eq!(session.tasks().len(), 1);
    let id = session.tasks()[0].id.clone();
    session.update_task_text(&id, "buy milk");

    session.set_kind(NoteKind::Text);
    assert_eq!(session.text(), "");
    assert!(session.tasks().is_empty());
}

#[test]
fn selecting_current_kind_keeps_content() {
    let mut session = EditSession::new(NoteKind::Text);
    session.set_text("keep me");
    session.set_kind(NoteKind::Text);
    assert_eq!(session.text(), "keep me");
}

#[test]
fn row_edits_are_addressed_by_id() {
    let mut session = EditSession::new(NoteKind::List);
    let first = session.tasks()[0].id.clone();
    let second = session.add_task().unwrap();

    assert!(session.update_task_text(&second, "second"));
    assert!(session.update_task_text(&first, "first"));
    assert!(session.set_task_done(&first, true));
    assert!(session.remove_task(&second));
    assert!(!session.remove_task(&second));
    assert!(!session.update_task_text("missing", "x"));

    assert_eq!(session.tasks().len(), 1);
    assert_eq!(session.tasks()[0].text, "first");
    assert!(session.tasks()[0].done);
}

#[test]
fn text_sessions_have_no_rows_to_add() {
    let mut session = EditSession::new(NoteKind::Text);
    assert_eq!(session.add_task(), None);
}

#[test]
fn commit_drops_blank_rows_in_order() {
    let mut session = EditSession::new(NoteKind::List);
    let a = session.tasks()[0].id.clone();
    let blank = session.add_task().unwrap();
    let b = session.add_task().unwrap();
    let spaces = session.add_task().unwrap();
    session.update_task_text(&a, "a");
    session.update_task_text(&blank, "");
    session.update_task_text(&b, "b");
    session.update_task_text(&spaces, "   ");

    let draft = session.commit().unwrap();
    assert_eq!(draft.kind, NoteKind::List);
    let persisted = decode_task_list(&draft.body).unwrap();
    let texts: Vec<&str> = persisted.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b"]);
}

#[test]
fn commit_of_text_session_uses_literal_text() {
    let mut session = EditSession::new(NoteKind::Text);
    session.set_title("Groceries");
    session.set_text("  milk\neggs  ");
    session.set_category("home");
    session.set_color(NoteColor::Green);

    let draft = session.commit().unwrap();
    assert_eq!(draft.body, "  milk\neggs  ");
    assert_eq!(draft.title, "Groceries");
    assert_eq!(draft.category, "home");
    assert_eq!(draft.color, NoteColor::Green.to_argb());
}

#[test]
fn saving_a_fresh_session_creates_a_note() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let mut session = EditSession::new(NoteKind::List);
    session.set_title("Weekend");
    let first = session.tasks()[0].id.clone();
    session.update_task_text(&first, "buy milk");

    let saved = service.save_session(&session).unwrap().unwrap();
    assert_eq!(saved.kind, NoteKind::List);
    assert_eq!(service.list_notes(), vec![saved]);
}

#[test]
fn committed_list_survives_reload_and_partitions() {
    let conn = open_db_in_memory().unwrap();
    let created = service(&conn)
        .create_note("Chores", "", NoteKind::List)
        .unwrap();

    let mut session = EditSession::from_note(&created);
    let milk = session.tasks()[0].id.clone();
    session.update_task_text(&milk, "buy milk");
    let rent = session.add_task().unwrap();
    session.update_task_text(&rent, "pay rent");
    session.set_task_done(&rent, true);
    service(&conn).save_session(&session).unwrap().unwrap();

    let reloaded = service(&conn).get_note(created.id).unwrap();
    let partition = partition_tasks(&reloaded.tasks().unwrap());
    let active: Vec<&str> = partition.active.iter().map(|t| t.text.as_str()).collect();
    let completed: Vec<&str> = partition.completed.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(active, vec!["buy milk"]);
    assert_eq!(completed, vec!["pay rent"]);
}

#[test]
fn switching_kind_then_saving_changes_stored_kind() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let created = service.create_note("x", "free text", NoteKind::Text).unwrap();

    let mut session = EditSession::from_note(&created);
    session.set_kind(NoteKind::List);
    let row = session.tasks()[0].id.clone();
    session.update_task_text(&row, "first row");
    service.save_session(&session).unwrap();

    let stored = service.get_note(created.id).unwrap();
    assert_eq!(stored.kind, NoteKind::List);
    assert_eq!(stored.tasks().unwrap()[0].text, "first row");
}

#[test]
fn saving_a_session_whose_note_was_deleted_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let created = service.create_note("gone", "", NoteKind::Text).unwrap();
    let session = EditSession::from_note(&created);
    service.delete_note(created.id).unwrap();

    assert_eq!(service.save_session(&session).unwrap(), None);
    assert!(service.list_notes().is_empty());
}
