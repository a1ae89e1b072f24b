//! Group service — CRUD over `todo_groups`.
//!
//! DESIGN
//! ======
//! Groups are the server-side half of a board card: name and color only.
//! Position and size never reach this layer; they are client-side UI state.
//! Deleting a group cascades to its todos at the schema level.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::services::todo::TodoRow;

#[cfg(test)]
#[path = "group_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    #[error("group not found: {0}")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from group queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRow {
    pub id: Uuid,
    pub name: String,
    pub color: Option<String>,
}

/// Sparse update for a group. The outer `Option` means "field present in the
/// request"; for `color` the inner one distinguishes set from clear.
#[derive(Debug, Clone, Default)]
pub struct GroupChanges {
    pub name: Option<String>,
    pub color: Option<Option<String>>,
}

/// Apply a sparse update to a row in memory.
pub fn apply_changes(row: &mut GroupRow, changes: GroupChanges) {
    if let Some(name) = changes.name {
        row.name = name;
    }
    if let Some(color) = changes.color {
        row.color = color;
    }
}

/// Pair each group with its todos, preserving both input orders.
///
/// Todos that reference no group (or a group not in `groups`) are skipped;
/// they remain reachable through the flat todos listing.
#[must_use]
pub fn attach_todos(groups: Vec<GroupRow>, todos: Vec<TodoRow>) -> Vec<(GroupRow, Vec<TodoRow>)> {
    let mut by_group: HashMap<Uuid, Vec<TodoRow>> = HashMap::new();
    for todo in todos {
        if let Some(group_id) = todo.group_id {
            by_group.entry(group_id).or_default().push(todo);
        }
    }
    groups
        .into_iter()
        .map(|group| {
            let todos = by_group.remove(&group.id).unwrap_or_default();
            (group, todos)
        })
        .collect()
}

/// Create a new group.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_group(pool: &PgPool, name: &str, color: Option<&str>) -> Result<GroupRow, GroupError> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO todo_groups (id, name, color) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(name)
        .bind(color)
        .execute(pool)
        .await?;

    tracing::info!(%id, name, "created group");
    Ok(GroupRow { id, name: name.to_string(), color: color.map(str::to_string) })
}

/// List all groups in creation order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_groups(pool: &PgPool) -> Result<Vec<GroupRow>, GroupError> {
    let rows = sqlx::query_as::<_, (Uuid, String, Option<String>)>(
        "SELECT id, name, color FROM todo_groups ORDER BY created_at ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, color)| GroupRow { id, name, color })
        .collect())
}

/// Fetch one group by id.
///
/// # Errors
///
/// Returns `NotFound` if no such group exists, or a database error.
pub async fn get_group(pool: &PgPool, group_id: Uuid) -> Result<GroupRow, GroupError> {
    let row = sqlx::query_as::<_, (Uuid, String, Option<String>)>(
        "SELECT id, name, color FROM todo_groups WHERE id = $1",
    )
    .bind(group_id)
    .fetch_optional(pool)
    .await?
    .ok_or(GroupError::NotFound(group_id))?;

    Ok(GroupRow { id: row.0, name: row.1, color: row.2 })
}

/// Apply a sparse update to a group and return the updated row.
///
/// # Errors
///
/// Returns `NotFound` if no such group exists, or a database error.
pub async fn update_group(pool: &PgPool, group_id: Uuid, changes: GroupChanges) -> Result<GroupRow, GroupError> {
    let mut row = get_group(pool, group_id).await?;
    apply_changes(&mut row, changes);

    sqlx::query("UPDATE todo_groups SET name = $2, color = $3 WHERE id = $1")
        .bind(group_id)
        .bind(&row.name)
        .bind(&row.color)
        .execute(pool)
        .await?;

    Ok(row)
}

/// Delete a group by id. Its todos go with it (schema cascade).
///
/// # Errors
///
/// Returns `NotFound` if no such group exists, or a database error.
pub async fn delete_group(pool: &PgPool, group_id: Uuid) -> Result<(), GroupError> {
    let result = sqlx::query("DELETE FROM todo_groups WHERE id = $1")
        .bind(group_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(GroupError::NotFound(group_id));
    }
    tracing::info!(%group_id, "deleted group");
    Ok(())
}
