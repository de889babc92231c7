//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;
use crate::service::TodoService;

/// Shared application state.
///
/// Generic over `D: Database` so the router works with any storage backend.
/// The database is injected by the caller, never created here.
pub struct AppState<D: Database> {
    todos: TodoService<D>,
}

// Manual Clone impl - we only need the service's Arc to be cloneable, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            todos: self.todos.clone(),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState around the given database.
    pub fn new(db: impl Into<Arc<D>>) -> Self {
        Self {
            todos: TodoService::new(db),
        }
    }

    /// Get a reference to the todo service.
    pub fn todos(&self) -> &TodoService<D> {
        &self.todos
    }
}
