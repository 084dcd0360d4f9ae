use jotter_core::db::open_db_in_memory;
use jotter_core::view::card::{truncate_preview, CARD_TASK_LIMIT};
use jotter_core::{
    encode_task_list, note_card, resolve_color, text_preview, CardBody, Note, NoteColor, NoteKind,
    NoteService, NoteStore, SqliteSlotStore, TaskItem, TextTone,
};

fn task(text: &str, done: bool) -> TaskItem {
    let mut task = TaskItem::new(text);
    task.done = done;
    task
}

#[test]
fn text_note_scenario_renders_collapsed_preview() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(NoteStore::new(SqliteSlotStore::try_new(&conn).unwrap()));
    service
        .create_note("Groceries", "milk\neggs", NoteKind::Text)
        .unwrap();

    let listed = service.list_notes();
    let card = note_card(&listed[0]);
    assert_eq!(card.title, "Groceries");
    assert_eq!(card.body, CardBody::Text("milk eggs".to_string()));
    assert_eq!(card.color, NoteColor::Default);
    assert_eq!(card.text_tone, TextTone::Dark);
    assert_eq!(card.category, None);
}

#[test]
fn list_card_shows_first_rows_active_before_completed() {
    let tasks = vec![
        task("done-1", true),
        task("open-1", false),
        task("done-2", true),
        task("open-2", false),
        task("open-3", false),
    ];
    let mut note = Note::new(1, NoteKind::List, 0);
    note.body = encode_task_list(&tasks).unwrap();
    note.category = "  errands ".to_string();

    let card = note_card(&note);
    let CardBody::Tasks(rows) = card.body else {
        panic!("expected task body");
    };
    assert_eq!(rows.len(), CARD_TASK_LIMIT);
    let texts: Vec<&str> = rows.iter().map(|row| row.text.as_str()).collect();
    assert_eq!(texts, vec!["open-1", "open-2", "open-3"]);
    assert_eq!(card.category.as_deref(), Some("errands"));
    assert_eq!(card.color, NoteColor::PurpleLight);
}

#[test]
fn malformed_list_body_renders_empty_rows() {
    let mut note = Note::new(1, NoteKind::List, 0);
    note.body = "not json".to_string();
    assert_eq!(note_card(&note).body, CardBody::Tasks(Vec::new()));
}

#[test]
fn text_body_that_looks_like_json_is_previewed_as_text() {
    let mut note = Note::new(1, NoteKind::Text, 0);
    note.body = "[]".to_string();
    assert_eq!(note_card(&note).body, CardBody::Text("[]".to_string()));
}

#[test]
fn unknown_colors_resolve_to_default_on_cards() {
    let mut note = Note::new(1, NoteKind::Text, 0);
    note.color = 0x0000_0000;
    let card = note_card(&note);
    assert_eq!(card.color, NoteColor::Default);
    assert_eq!(resolve_color(-123_456), NoteColor::Default);
}

#[test]
fn dark_note_color_uses_light_text() {
    let mut note = Note::new(1, NoteKind::Text, 0);
    note.color = NoteColor::Black.to_argb();
    assert_eq!(note_card(&note).text_tone, TextTone::Light);
}

#[test]
fn preview_helpers_compose() {
    let preview = text_preview("  first line\nsecond line\n");
    assert_eq!(preview, "first line second line");
    assert_eq!(truncate_preview(&preview, 10), "first line...");
}
