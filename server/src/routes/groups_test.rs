use super::*;
use uuid::Uuid;

// --- error mapping ---

#[test]
fn group_error_to_status_maps_not_found() {
    let err = group::GroupError::NotFound(Uuid::nil());
    assert_eq!(group_error_to_status(err), StatusCode::NOT_FOUND);
}

#[test]
fn group_error_to_status_maps_database() {
    let err = group::GroupError::Database(sqlx::Error::PoolClosed);
    assert_eq!(group_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}

// --- body deserialization ---

#[test]
fn create_body_allows_empty_object() {
    let body: CreateGroupBody = serde_json::from_str("{}").unwrap();
    assert!(body.name.is_none());
    assert!(body.color.is_none());
}

#[test]
fn create_body_parses_fields() {
    let body: CreateGroupBody = serde_json::from_str(r##"{"name":"Work Tasks","color":"#ffcc99"}"##).unwrap();
    assert_eq!(body.name.as_deref(), Some("Work Tasks"));
    assert_eq!(body.color.as_deref(), Some("#ffcc99"));
}

#[test]
fn update_body_absent_color_means_no_change() {
    let body: UpdateGroupBody = serde_json::from_str(r#"{"name":"Renamed"}"#).unwrap();
    assert_eq!(body.name.as_deref(), Some("Renamed"));
    assert!(body.color.is_none());
}

#[test]
fn update_body_null_color_means_clear() {
    let body: UpdateGroupBody = serde_json::from_str(r#"{"color":null}"#).unwrap();
    assert_eq!(body.color, Some(None));
}

#[test]
fn update_body_value_color_means_set() {
    let body: UpdateGroupBody = serde_json::from_str(r##"{"color":"#ccffcc"}"##).unwrap();
    assert_eq!(body.color, Some(Some("#ccffcc".to_owned())));
}

// --- response shape ---

#[test]
fn to_response_nests_todos() {
    let group = GroupRow { id: Uuid::new_v4(), name: "Personal".to_owned(), color: Some("#ffcc99".to_owned()) };
    let todos = vec![TodoRow {
        id: Uuid::new_v4(),
        group_id: Some(group.id),
        title: "Buy groceries".to_owned(),
        description: None,
        note: Some("and coffee".to_owned()),
        completed: false,
    }];

    let response = to_response(group.clone(), todos);
    assert_eq!(response.id, group.id);
    assert_eq!(response.todos.len(), 1);
    assert_eq!(response.todos[0].title, "Buy groceries");
}

#[test]
fn group_response_serializes_expected_fields() {
    let group = GroupRow { id: Uuid::nil(), name: "Work".to_owned(), color: None };
    let json = serde_json::to_value(to_response(group, Vec::new())).unwrap();
    assert!(json.get("id").is_some());
    assert_eq!(json.get("name").and_then(|v| v.as_str()), Some("Work"));
    assert!(json.get("color").is_some_and(serde_json::Value::is_null));
    assert!(json.get("todos").is_some_and(|v| v.as_array().is_some_and(|a| a.is_empty())));
}
