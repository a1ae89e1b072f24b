//! Todo service — CRUD over `todos`.
//!
//! DESIGN
//! ======
//! A todo may belong to at most one group. Creating or re-homing a todo
//! verifies the referenced group first so a stale client gets a clean
//! error instead of a foreign-key violation surfacing as a 500.

use sqlx::PgPool;
use uuid::Uuid;

#[cfg(test)]
#[path = "todo_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("todo not found: {0}")]
    NotFound(Uuid),
    #[error("group not found: {0}")]
    GroupNotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from todo queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: Uuid,
    pub group_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub completed: bool,
}

/// Fields for a new todo.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub completed: bool,
    pub group_id: Option<Uuid>,
}

/// Sparse update for a todo. The outer `Option` means "field present in the
/// request"; inner ones distinguish set from clear.
#[derive(Debug, Clone, Default)]
pub struct TodoChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub note: Option<Option<String>>,
    pub completed: Option<bool>,
    pub group_id: Option<Option<Uuid>>,
}

/// Apply a sparse update to a row in memory.
pub fn apply_changes(row: &mut TodoRow, changes: TodoChanges) {
    if let Some(title) = changes.title {
        row.title = title;
    }
    if let Some(description) = changes.description {
        row.description = description;
    }
    if let Some(note) = changes.note {
        row.note = note;
    }
    if let Some(completed) = changes.completed {
        row.completed = completed;
    }
    if let Some(group_id) = changes.group_id {
        row.group_id = group_id;
    }
}

async fn ensure_group_exists(pool: &PgPool, group_id: Uuid) -> Result<(), TodoError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM todo_groups WHERE id = $1)")
        .bind(group_id)
        .fetch_one(pool)
        .await?;
    if exists {
        Ok(())
    } else {
        Err(TodoError::GroupNotFound(group_id))
    }
}

/// Create a new todo.
///
/// # Errors
///
/// Returns `GroupNotFound` if `group_id` references a missing group, or a
/// database error.
pub async fn create_todo(pool: &PgPool, new: NewTodo) -> Result<TodoRow, TodoError> {
    if let Some(group_id) = new.group_id {
        ensure_group_exists(pool, group_id).await?;
    }

    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO todos (id, group_id, title, description, note, completed) VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(id)
    .bind(new.group_id)
    .bind(&new.title)
    .bind(&new.description)
    .bind(&new.note)
    .bind(new.completed)
    .execute(pool)
    .await?;

    tracing::info!(%id, title = %new.title, "created todo");
    Ok(TodoRow {
        id,
        group_id: new.group_id,
        title: new.title,
        description: new.description,
        note: new.note,
        completed: new.completed,
    })
}

/// List all todos in creation order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_todos(pool: &PgPool) -> Result<Vec<TodoRow>, TodoError> {
    let rows = sqlx::query_as::<_, (Uuid, Option<Uuid>, String, Option<String>, Option<String>, bool)>(
        "SELECT id, group_id, title, description, note, completed FROM todos ORDER BY created_at ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_todo).collect())
}

/// List one group's todos in creation order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_todos_for_group(pool: &PgPool, group_id: Uuid) -> Result<Vec<TodoRow>, TodoError> {
    let rows = sqlx::query_as::<_, (Uuid, Option<Uuid>, String, Option<String>, Option<String>, bool)>(
        "SELECT id, group_id, title, description, note, completed FROM todos \
         WHERE group_id = $1 ORDER BY created_at ASC, id ASC",
    )
    .bind(group_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_todo).collect())
}

/// Fetch one todo by id.
///
/// # Errors
///
/// Returns `NotFound` if no such todo exists, or a database error.
pub async fn get_todo(pool: &PgPool, todo_id: Uuid) -> Result<TodoRow, TodoError> {
    let row = sqlx::query_as::<_, (Uuid, Option<Uuid>, String, Option<String>, Option<String>, bool)>(
        "SELECT id, group_id, title, description, note, completed FROM todos WHERE id = $1",
    )
    .bind(todo_id)
    .fetch_optional(pool)
    .await?
    .ok_or(TodoError::NotFound(todo_id))?;

    Ok(row_to_todo(row))
}

/// Apply a sparse update to a todo and return the updated row.
///
/// # Errors
///
/// Returns `NotFound` if no such todo exists, `GroupNotFound` if the update
/// re-homes it to a missing group, or a database error.
pub async fn update_todo(pool: &PgPool, todo_id: Uuid, changes: TodoChanges) -> Result<TodoRow, TodoError> {
    if let Some(Some(group_id)) = changes.group_id {
        ensure_group_exists(pool, group_id).await?;
    }

    let mut row = get_todo(pool, todo_id).await?;
    apply_changes(&mut row, changes);

    sqlx::query(
        "UPDATE todos SET group_id = $2, title = $3, description = $4, note = $5, completed = $6 WHERE id = $1",
    )
    .bind(todo_id)
    .bind(row.group_id)
    .bind(&row.title)
    .bind(&row.description)
    .bind(&row.note)
    .bind(row.completed)
    .execute(pool)
    .await?;

    Ok(row)
}

/// Delete a todo by id.
///
/// # Errors
///
/// Returns `NotFound` if no such todo exists, or a database error.
pub async fn delete_todo(pool: &PgPool, todo_id: Uuid) -> Result<(), TodoError> {
    let result = sqlx::query("DELETE FROM todos WHERE id = $1")
        .bind(todo_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(TodoError::NotFound(todo_id));
    }
    tracing::info!(%todo_id, "deleted todo");
    Ok(())
}

type TodoTuple = (Uuid, Option<Uuid>, String, Option<String>, Option<String>, bool);

fn row_to_todo((id, group_id, title, description, note, completed): TodoTuple) -> TodoRow {
    TodoRow { id, group_id, title, description, note, completed }
}
