use super::*;
use uuid::Uuid;

// --- error mapping ---

#[test]
fn todo_error_to_status_maps_not_found() {
    let err = todo::TodoError::NotFound(Uuid::nil());
    assert_eq!(todo_error_to_status(err), StatusCode::NOT_FOUND);
}

#[test]
fn todo_error_to_status_maps_missing_group_to_bad_request() {
    let err = todo::TodoError::GroupNotFound(Uuid::nil());
    assert_eq!(todo_error_to_status(err), StatusCode::BAD_REQUEST);
}

#[test]
fn todo_error_to_status_maps_database() {
    let err = todo::TodoError::Database(sqlx::Error::PoolClosed);
    assert_eq!(todo_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}

// --- body deserialization ---

#[test]
fn create_body_allows_empty_object() {
    let body: CreateTodoBody = serde_json::from_str("{}").unwrap();
    assert!(body.title.is_none());
    assert!(!body.completed);
    assert!(body.group_id.is_none());
}

#[test]
fn create_body_parses_all_fields() {
    let group_id = Uuid::new_v4();
    let raw = format!(
        r#"{{"title":"Workout","description":"legs","note":"gym","completed":true,"group_id":"{group_id}"}}"#
    );
    let body: CreateTodoBody = serde_json::from_str(&raw).unwrap();
    assert_eq!(body.title.as_deref(), Some("Workout"));
    assert_eq!(body.description.as_deref(), Some("legs"));
    assert_eq!(body.note.as_deref(), Some("gym"));
    assert!(body.completed);
    assert_eq!(body.group_id, Some(group_id));
}

#[test]
fn update_body_absent_fields_mean_no_change() {
    let body: UpdateTodoBody = serde_json::from_str(r#"{"completed":true}"#).unwrap();
    assert_eq!(body.completed, Some(true));
    assert!(body.title.is_none());
    assert!(body.description.is_none());
    assert!(body.note.is_none());
    assert!(body.group_id.is_none());
}

#[test]
fn update_body_null_note_means_clear() {
    let body: UpdateTodoBody = serde_json::from_str(r#"{"note":null}"#).unwrap();
    assert_eq!(body.note, Some(None));
}

#[test]
fn update_body_null_group_id_means_detach() {
    let body: UpdateTodoBody = serde_json::from_str(r#"{"group_id":null}"#).unwrap();
    assert_eq!(body.group_id, Some(None));
}

#[test]
fn update_body_value_group_id_means_rehome() {
    let group_id = Uuid::new_v4();
    let body: UpdateTodoBody = serde_json::from_str(&format!(r#"{{"group_id":"{group_id}"}}"#)).unwrap();
    assert_eq!(body.group_id, Some(Some(group_id)));
}

// --- response shape ---

#[test]
fn todo_response_serializes_expected_fields() {
    let row = TodoRow {
        id: Uuid::nil(),
        group_id: None,
        title: "Call dentist".to_owned(),
        description: None,
        note: None,
        completed: true,
    };
    let json = serde_json::to_value(todo_to_response(row)).unwrap();
    assert_eq!(json.get("title").and_then(|v| v.as_str()), Some("Call dentist"));
    assert_eq!(json.get("completed").and_then(serde_json::Value::as_bool), Some(true));
    assert!(json.get("group_id").is_some_and(serde_json::Value::is_null));
}
