//! Todo CRUD handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiJson, ApiPath, ErrorResponse};
use crate::db::{Database, NewTodo, Todo, TodoPatch};

/// Path parameters of the `/todos/{todo_id}` routes.
///
/// Extracted as a named struct so parse failures report `todo_id` as the
/// offending field.
#[derive(Debug, Deserialize)]
pub struct TodoIdPath {
    pub todo_id: i64,
}

/// Retrieve all todo items
///
/// Items are returned in creation order.
#[utoipa::path(
    get,
    path = "/todos",
    tag = "todos",
    operation_id = "get_all_todos",
    responses(
        (status = 200, description = "All todo items", body = [Todo]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_all_todos<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.todos().list().await?;
    Ok(Json(todos))
}

/// Retrieve a single todo item by its ID
#[utoipa::path(
    get,
    path = "/todos/{todo_id}",
    tag = "todos",
    operation_id = "get_todo",
    params(("todo_id" = i64, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Todo found", body = Todo),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 422, description = "Invalid todo ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_todo<D: Database>(
    State(state): State<AppState<D>>,
    ApiPath(TodoIdPath { todo_id }): ApiPath<TodoIdPath>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.todos().get(todo_id).await?;
    Ok(Json(todo))
}

/// Create a new todo item
#[utoipa::path(
    post,
    path = "/todos",
    tag = "todos",
    operation_id = "create_todo",
    request_body = NewTodo,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_todo<D: Database>(
    State(state): State<AppState<D>>,
    ApiJson(req): ApiJson<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let created = state.todos().create(req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing todo item
///
/// Only the fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/todos/{todo_id}",
    tag = "todos",
    operation_id = "update_todo",
    params(("todo_id" = i64, Path, description = "Todo ID")),
    request_body = TodoPatch,
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 422, description = "Invalid request body or todo ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_todo<D: Database>(
    State(state): State<AppState<D>>,
    ApiPath(TodoIdPath { todo_id }): ApiPath<TodoIdPath>,
    ApiJson(req): ApiJson<TodoPatch>,
) -> Result<Json<Todo>, ApiError> {
    let updated = state.todos().update(todo_id, req).await?;
    Ok(Json(updated))
}

/// Delete a todo item by its ID
#[utoipa::path(
    delete,
    path = "/todos/{todo_id}",
    tag = "todos",
    operation_id = "delete_todo",
    params(("todo_id" = i64, Path, description = "Todo ID")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 422, description = "Invalid todo ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_todo<D: Database>(
    State(state): State<AppState<D>>,
    ApiPath(TodoIdPath { todo_id }): ApiPath<TodoIdPath>,
) -> Result<StatusCode, ApiError> {
    state.todos().delete(todo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
