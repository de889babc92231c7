//! Todo use-case service.
//!
//! # Responsibility
//! - Provide the five CRUD entry points shared by the HTTP and MCP transports.
//! - Validate input shapes before anything reaches the persistence layer.
//! - Translate storage errors into the service error taxonomy.
//!
//! # Invariants
//! - Validation failures never touch the database.
//! - The service is storage-agnostic; it only sees the `Database` trait.

use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;
use tracing::{error, instrument};

use crate::db::{Database, DbError, NewTodo, Todo, TodoPatch, TodoRepository};

/// Upper bound on todo content, in characters.
pub const MAX_CONTENT_LEN: usize = 4096;

/// Errors surfaced by todo operations.
#[derive(Error, Diagnostic, Debug)]
pub enum TodoError {
    #[error("Invalid {field}: {message}")]
    #[diagnostic(code(todos::service::validation))]
    Validation { field: String, message: String },

    #[error("Todo {id} not found")]
    #[diagnostic(code(todos::service::not_found))]
    NotFound { id: i64 },

    #[error("Storage failure: {0}")]
    #[diagnostic(code(todos::service::storage))]
    Storage(#[source] DbError),
}

impl TodoError {
    fn validation(field: &str, message: impl Into<String>) -> Self {
        TodoError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn from_db(id: Option<i64>, e: DbError) -> Self {
        match (e, id) {
            (DbError::NotFound { .. }, Some(id)) => TodoError::NotFound { id },
            (e, _) => {
                error!(error = %e, "Todo storage operation failed");
                TodoError::Storage(e)
            }
        }
    }
}

pub type TodoResult<T> = Result<T, TodoError>;

/// CRUD service over a shared database handle.
pub struct TodoService<D: Database> {
    db: Arc<D>,
}

// Manual Clone impl - only the Arc needs to be cloneable, not D
impl<D: Database> Clone for TodoService<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> TodoService<D> {
    pub fn new(db: impl Into<Arc<D>>) -> Self {
        Self { db: db.into() }
    }

    /// All todos in insertion order. An empty store yields an empty list.
    #[instrument(skip(self))]
    pub async fn list(&self) -> TodoResult<Vec<Todo>> {
        self.db
            .todos()
            .list()
            .await
            .map_err(|e| TodoError::from_db(None, e))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> TodoResult<Todo> {
        self.db
            .todos()
            .get(id)
            .await
            .map_err(|e| TodoError::from_db(Some(id), e))
    }

    /// Create a todo. New todos always start with `completed = false`.
    #[instrument(skip(self))]
    pub async fn create(&self, new: NewTodo) -> TodoResult<Todo> {
        validate_content(&new.content)?;

        self.db
            .todos()
            .create(&new)
            .await
            .map_err(|e| TodoError::from_db(None, e))
    }

    /// Apply a partial update. Fields absent from `patch` stay as they are.
    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, patch: TodoPatch) -> TodoResult<Todo> {
        if let Some(content) = &patch.content {
            validate_content(content)?;
        }

        self.db
            .todos()
            .update(id, &patch)
            .await
            .map_err(|e| TodoError::from_db(Some(id), e))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> TodoResult<()> {
        self.db
            .todos()
            .delete(id)
            .await
            .map_err(|e| TodoError::from_db(Some(id), e))
    }
}

/// Content must be non-blank and at most `MAX_CONTENT_LEN` characters.
pub fn validate_content(content: &str) -> TodoResult<()> {
    if content.trim().is_empty() {
        return Err(TodoError::validation("content", "must not be empty"));
    }
    let len = content.chars().count();
    if len > MAX_CONTENT_LEN {
        return Err(TodoError::validation(
            "content",
            format!(
                "must be at most {} characters (got {})",
                MAX_CONTENT_LEN, len
            ),
        ));
    }
    Ok(())
}
