//! Todo-group routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::double_option;
use crate::routes::todos::{TodoResponse, todo_to_response};
use crate::services::group::{self, GroupChanges, GroupRow};
use crate::services::todo::{self, TodoRow};
use crate::state::AppState;

#[cfg(test)]
#[path = "groups_test.rs"]
mod tests;

#[derive(Debug, Serialize)]
pub struct GroupResponse {
    pub id: Uuid,
    pub name: String,
    pub color: Option<String>,
    pub todos: Vec<TodoResponse>,
}

fn to_response(group: GroupRow, todos: Vec<TodoRow>) -> GroupResponse {
    GroupResponse {
        id: group.id,
        name: group.name,
        color: group.color,
        todos: todos.into_iter().map(todo_to_response).collect(),
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateGroupBody {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGroupBody {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub color: Option<Option<String>>,
}

pub(crate) fn group_error_to_status(err: group::GroupError) -> StatusCode {
    match err {
        group::GroupError::NotFound(_) => StatusCode::NOT_FOUND,
        group::GroupError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/groups` — list all groups, each with its todos.
pub async fn list_groups(State(state): State<AppState>) -> Result<Json<Vec<GroupResponse>>, StatusCode> {
    let groups = group::list_groups(&state.pool)
        .await
        .map_err(group_error_to_status)?;
    let todos = todo::list_todos(&state.pool)
        .await
        .map_err(crate::routes::todos::todo_error_to_status)?;

    Ok(Json(
        group::attach_todos(groups, todos)
            .into_iter()
            .map(|(g, ts)| to_response(g, ts))
            .collect(),
    ))
}

/// `POST /api/groups` — create a new group.
pub async fn create_group(
    State(state): State<AppState>,
    Json(body): Json<CreateGroupBody>,
) -> Result<(StatusCode, Json<GroupResponse>), StatusCode> {
    let name = body.name.as_deref().unwrap_or("New Group");
    let row = group::create_group(&state.pool, name, body.color.as_deref())
        .await
        .map_err(group_error_to_status)?;

    Ok((StatusCode::CREATED, Json(to_response(row, Vec::new()))))
}

/// `GET /api/groups/:id` — fetch one group with its todos.
pub async fn get_group(
    State(state): State<AppState>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<GroupResponse>, StatusCode> {
    let row = group::get_group(&state.pool, group_id)
        .await
        .map_err(group_error_to_status)?;
    let todos = todo::list_todos_for_group(&state.pool, group_id)
        .await
        .map_err(crate::routes::todos::todo_error_to_status)?;

    Ok(Json(to_response(row, todos)))
}

/// `PUT /api/groups/:id` — partial update of name/color.
pub async fn update_group(
    State(state): State<AppState>,
    Path(group_id): Path<Uuid>,
    Json(body): Json<UpdateGroupBody>,
) -> Result<Json<GroupResponse>, StatusCode> {
    let changes = GroupChanges { name: body.name, color: body.color };
    let row = group::update_group(&state.pool, group_id, changes)
        .await
        .map_err(group_error_to_status)?;
    let todos = todo::list_todos_for_group(&state.pool, group_id)
        .await
        .map_err(crate::routes::todos::todo_error_to_status)?;

    Ok(Json(to_response(row, todos)))
}

/// `DELETE /api/groups/:id` — delete a group and its todos.
pub async fn delete_group(
    State(state): State<AppState>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    group::delete_group(&state.pool, group_id)
        .await
        .map_err(group_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
