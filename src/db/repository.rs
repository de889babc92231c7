//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{NewTodo, Todo, TodoPatch},
};

/// Repository for Todo operations.
///
/// Every write runs in its own transaction: it either commits fully or
/// leaves the store untouched.
pub trait TodoRepository: Send + Sync {
    /// Get all todos, ordered by ascending id (insertion order).
    fn list(&self) -> impl Future<Output = DbResult<Vec<Todo>>> + Send;

    /// Get a todo by ID.
    fn get(&self, id: i64) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Insert a new todo and return the stored row with its assigned id.
    fn create(&self, todo: &NewTodo) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Apply the supplied fields to an existing todo and return the stored row.
    fn update(&self, id: i64, patch: &TodoPatch) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Delete a todo by ID.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
///
/// Implementations are constructed once at startup, shared for the life of
/// the process and closed explicitly at shutdown.
pub trait Database: Send + Sync {
    type Todos<'a>: TodoRepository
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Release all connections held by this database.
    fn close(&self) -> impl Future<Output = ()> + Send;

    /// Get the todo repository.
    fn todos(&self) -> Self::Todos<'_>;
}
