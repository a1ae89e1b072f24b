use std::collections::HashMap;

use canvas::consts::{DEFAULT_CARD_HEIGHT, DEFAULT_CARD_WIDTH};
use uuid::Uuid;

use super::*;

fn make_group(name: &str) -> Group {
    Group { id: Uuid::new_v4(), name: name.to_owned(), color: None, todos: Vec::new() }
}

fn make_todo(group_id: Uuid, title: &str) -> Todo {
    Todo {
        id: Uuid::new_v4(),
        group_id: Some(group_id),
        title: title.to_owned(),
        description: None,
        note: None,
        completed: false,
    }
}

fn state_with(groups: Vec<Group>) -> GroupsState {
    GroupsState { groups: merge_layouts(groups, &HashMap::new()), loading: false }
}

// --- merge_layouts / place_new_card ---

#[test]
fn merge_uses_stored_layout_when_present() {
    let group = make_group("Work");
    let stored_layout = CardLayout { id: group.id, x: 640.0, y: 480.0, width: 350.0, height: 260.0 };
    let mut stored = HashMap::new();
    stored.insert(group.id, stored_layout);

    let merged = merge_layouts(vec![group], &stored);
    assert_eq!(merged[0].layout, stored_layout);
}

#[test]
fn merge_places_unknown_groups_in_cascade() {
    let merged = merge_layouts(vec![make_group("A"), make_group("B")], &HashMap::new());
    assert_eq!(merged[0].layout.x, 100.0);
    assert_eq!(merged[0].layout.y, 100.0);
    assert_eq!(merged[1].layout.x, 150.0);
    assert_eq!(merged[1].layout.y, 150.0);
}

#[test]
fn merge_preserves_group_order() {
    let groups = vec![make_group("first"), make_group("second"), make_group("third")];
    let names: Vec<String> = groups.iter().map(|g| g.name.clone()).collect();
    let merged = merge_layouts(groups, &HashMap::new());
    let merged_names: Vec<&str> = merged.iter().map(|bg| bg.group.name.as_str()).collect();
    assert_eq!(merged_names, names.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn place_new_card_uses_default_size() {
    let layout = place_new_card(Uuid::new_v4(), 0);
    assert_eq!(layout.width, DEFAULT_CARD_WIDTH);
    assert_eq!(layout.height, DEFAULT_CARD_HEIGHT);
}

// --- group mutations ---

#[test]
fn push_group_cascades_from_current_count() {
    let mut state = state_with(vec![make_group("A")]);
    state.push_group(make_group("B"));
    assert_eq!(state.groups.len(), 2);
    assert_eq!(state.groups[1].layout.x, 150.0);
}

#[test]
fn replace_group_keeps_layout() {
    let mut state = state_with(vec![make_group("A")]);
    let layout = CardLayout { x: 999.0, ..state.groups[0].layout };
    state.set_layout(layout);

    let mut renamed = state.groups[0].group.clone();
    renamed.name = "Renamed".to_owned();
    state.replace_group(renamed);

    assert_eq!(state.groups[0].group.name, "Renamed");
    assert_eq!(state.groups[0].layout.x, 999.0);
}

#[test]
fn replace_group_ignores_unknown_id() {
    let mut state = state_with(vec![make_group("A")]);
    state.replace_group(make_group("ghost"));
    assert_eq!(state.groups.len(), 1);
    assert_eq!(state.groups[0].group.name, "A");
}

#[test]
fn remove_group_drops_entry() {
    let mut state = state_with(vec![make_group("A"), make_group("B")]);
    let id = state.groups[0].group.id;
    state.remove_group(id);
    assert_eq!(state.groups.len(), 1);
    assert!(state.find(id).is_none());
}

#[test]
fn move_card_keeps_size() {
    let mut state = state_with(vec![make_group("A")]);
    let id = state.groups[0].group.id;
    let before = state.groups[0].layout;
    state.move_card(id, -40.0, 75.0);
    let layout = state.groups[0].layout;
    assert_eq!(layout.x, -40.0);
    assert_eq!(layout.y, 75.0);
    assert_eq!(layout.width, before.width);
    assert_eq!(layout.height, before.height);
}

#[test]
fn resize_card_keeps_position() {
    let mut state = state_with(vec![make_group("A")]);
    let id = state.groups[0].group.id;
    let before = state.groups[0].layout;
    state.resize_card(id, 512.0, 384.0);
    let layout = state.groups[0].layout;
    assert_eq!(layout.width, 512.0);
    assert_eq!(layout.height, 384.0);
    assert_eq!(layout.x, before.x);
    assert_eq!(layout.y, before.y);
}

#[test]
fn set_layout_ignores_unknown_id() {
    let mut state = state_with(vec![make_group("A")]);
    let before = state.groups[0].layout;
    state.set_layout(CardLayout { id: Uuid::new_v4(), x: 1.0, y: 2.0, width: 300.0, height: 200.0 });
    assert_eq!(state.groups[0].layout, before);
}

// --- todo mutations ---

#[test]
fn push_todo_appends_to_its_group() {
    let mut state = state_with(vec![make_group("A")]);
    let group_id = state.groups[0].group.id;
    state.push_todo(make_todo(group_id, "first"));
    state.push_todo(make_todo(group_id, "second"));
    let titles: Vec<&str> = state.groups[0].group.todos.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["first", "second"]);
}

#[test]
fn push_todo_without_group_is_ignored() {
    let mut state = state_with(vec![make_group("A")]);
    let mut todo = make_todo(Uuid::new_v4(), "loose");
    todo.group_id = None;
    state.push_todo(todo);
    assert_eq!(state.todo_count(), 0);
}

#[test]
fn replace_todo_updates_in_place() {
    let mut state = state_with(vec![make_group("A")]);
    let group_id = state.groups[0].group.id;
    state.push_todo(make_todo(group_id, "original"));

    let mut changed = state.groups[0].group.todos[0].clone();
    changed.completed = true;
    changed.title = "done".to_owned();
    state.replace_todo(changed);

    let todo = &state.groups[0].group.todos[0];
    assert!(todo.completed);
    assert_eq!(todo.title, "done");
    assert_eq!(state.todo_count(), 1);
}

#[test]
fn remove_todo_drops_it() {
    let mut state = state_with(vec![make_group("A")]);
    let group_id = state.groups[0].group.id;
    state.push_todo(make_todo(group_id, "one"));
    state.push_todo(make_todo(group_id, "two"));
    let id = state.groups[0].group.todos[0].id;
    state.remove_todo(id);
    assert_eq!(state.todo_count(), 1);
    assert_eq!(state.groups[0].group.todos[0].title, "two");
}

// --- layouts snapshot ---

#[test]
fn layouts_snapshot_covers_all_groups() {
    let state = state_with(vec![make_group("A"), make_group("B")]);
    let layouts = state.layouts();
    assert_eq!(layouts.len(), 2);
    for bg in &state.groups {
        assert_eq!(layouts.get(&bg.group.id), Some(&bg.layout));
    }
}
