use uuid::Uuid;

use super::*;

fn make_todo(title: &str) -> TodoRow {
    TodoRow {
        id: Uuid::new_v4(),
        group_id: None,
        title: title.to_owned(),
        description: None,
        note: None,
        completed: false,
    }
}

// --- apply_changes ---

#[test]
fn apply_changes_updates_title() {
    let mut row = make_todo("Buy groceries");
    apply_changes(&mut row, TodoChanges { title: Some("Buy milk".to_owned()), ..TodoChanges::default() });
    assert_eq!(row.title, "Buy milk");
}

#[test]
fn apply_changes_toggles_completed() {
    let mut row = make_todo("Workout");
    apply_changes(&mut row, TodoChanges { completed: Some(true), ..TodoChanges::default() });
    assert!(row.completed);
    apply_changes(&mut row, TodoChanges { completed: Some(false), ..TodoChanges::default() });
    assert!(!row.completed);
}

#[test]
fn apply_changes_sets_and_clears_note() {
    let mut row = make_todo("Call dentist");
    apply_changes(
        &mut row,
        TodoChanges { note: Some(Some("ask about Friday".to_owned())), ..TodoChanges::default() },
    );
    assert_eq!(row.note.as_deref(), Some("ask about Friday"));

    apply_changes(&mut row, TodoChanges { note: Some(None), ..TodoChanges::default() });
    assert_eq!(row.note, None);
}

#[test]
fn apply_changes_sets_and_clears_description() {
    let mut row = make_todo("Review pull requests");
    apply_changes(
        &mut row,
        TodoChanges { description: Some(Some("the open ones".to_owned())), ..TodoChanges::default() },
    );
    assert_eq!(row.description.as_deref(), Some("the open ones"));

    apply_changes(&mut row, TodoChanges { description: Some(None), ..TodoChanges::default() });
    assert_eq!(row.description, None);
}

#[test]
fn apply_changes_rehomes_and_detaches_group() {
    let mut row = make_todo("Team meeting");
    let group_id = Uuid::new_v4();
    apply_changes(&mut row, TodoChanges { group_id: Some(Some(group_id)), ..TodoChanges::default() });
    assert_eq!(row.group_id, Some(group_id));

    apply_changes(&mut row, TodoChanges { group_id: Some(None), ..TodoChanges::default() });
    assert_eq!(row.group_id, None);
}

#[test]
fn apply_changes_empty_is_a_no_op() {
    let mut row = make_todo("Workout");
    row.note = Some("gym".to_owned());
    let before = row.clone();
    apply_changes(&mut row, TodoChanges::default());
    assert_eq!(row, before);
}

#[test]
fn apply_changes_touches_only_present_fields() {
    let mut row = make_todo("Workout");
    row.description = Some("legs".to_owned());
    apply_changes(&mut row, TodoChanges { completed: Some(true), ..TodoChanges::default() });
    assert_eq!(row.description.as_deref(), Some("legs"));
    assert_eq!(row.title, "Workout");
}

// --- errors ---

#[test]
fn todo_error_display_includes_id() {
    let id = Uuid::new_v4();
    assert!(TodoError::NotFound(id).to_string().contains(&id.to_string()));
    assert!(TodoError::GroupNotFound(id).to_string().contains(&id.to_string()));
}
