//! Todo routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::double_option;
use crate::services::todo::{self, NewTodo, TodoChanges, TodoRow};
use crate::state::AppState;

#[cfg(test)]
#[path = "todos_test.rs"]
mod tests;

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: Uuid,
    pub group_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub completed: bool,
}

pub(crate) fn todo_to_response(row: TodoRow) -> TodoResponse {
    TodoResponse {
        id: row.id,
        group_id: row.group_id,
        title: row.title,
        description: row.description,
        note: row.note,
        completed: row.completed,
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub note: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub group_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoBody {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub note: Option<Option<String>>,
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub group_id: Option<Option<Uuid>>,
}

pub(crate) fn todo_error_to_status(err: todo::TodoError) -> StatusCode {
    match err {
        todo::TodoError::NotFound(_) => StatusCode::NOT_FOUND,
        todo::TodoError::GroupNotFound(_) => StatusCode::BAD_REQUEST,
        todo::TodoError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/todos` — list all todos.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoResponse>>, StatusCode> {
    let rows = todo::list_todos(&state.pool)
        .await
        .map_err(todo_error_to_status)?;
    Ok(Json(rows.into_iter().map(todo_to_response).collect()))
}

/// `POST /api/todos` — create a new todo.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoBody>,
) -> Result<(StatusCode, Json<TodoResponse>), StatusCode> {
    let new = NewTodo {
        title: body.title.unwrap_or_else(|| "New Todo".to_owned()),
        description: body.description,
        note: body.note,
        completed: body.completed,
        group_id: body.group_id,
    };
    let row = todo::create_todo(&state.pool, new)
        .await
        .map_err(todo_error_to_status)?;

    Ok((StatusCode::CREATED, Json(todo_to_response(row))))
}

/// `GET /api/todos/:id` — fetch one todo.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
) -> Result<Json<TodoResponse>, StatusCode> {
    let row = todo::get_todo(&state.pool, todo_id)
        .await
        .map_err(todo_error_to_status)?;
    Ok(Json(todo_to_response(row)))
}

/// `PUT /api/todos/:id` — partial update of any field.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
    Json(body): Json<UpdateTodoBody>,
) -> Result<Json<TodoResponse>, StatusCode> {
    let changes = TodoChanges {
        title: body.title,
        description: body.description,
        note: body.note,
        completed: body.completed,
        group_id: body.group_id,
    };
    let row = todo::update_todo(&state.pool, todo_id, changes)
        .await
        .map_err(todo_error_to_status)?;
    Ok(Json(todo_to_response(row)))
}

/// `DELETE /api/todos/:id` — delete one todo.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    todo::delete_todo(&state.pool, todo_id)
        .await
        .map_err(todo_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
