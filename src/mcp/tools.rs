//! MCP tools for Todo management.
//!
//! One tool per catalogued operation. Tool names match the OpenAPI
//! operation ids of the HTTP routes, and the input shapes are the same
//! `NewTodo` / `TodoPatch` models the HTTP layer validates against.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::server::McpServer;
use crate::db::{Database, NewTodo, TodoPatch};
use crate::service::TodoError;

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TodoIdParams {
    #[schemars(description = "Todo ID")]
    pub todo_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTodoParams {
    #[schemars(description = "Todo ID to update")]
    pub todo_id: i64,
    #[serde(flatten)]
    pub changes: TodoPatch,
}

// =============================================================================
// Todo Tools
// =============================================================================

#[tool_router(router = todo_tool_router, vis = "pub(super)")]
impl<D: Database + 'static> McpServer<D> {
    #[tool(description = "Retrieve all todo items, oldest first.")]
    pub async fn get_all_todos(&self) -> Result<CallToolResult, McpError> {
        let todos = self.todos.list().await.map_err(map_todo_error)?;
        json_result(&todos)
    }

    #[tool(description = "Retrieve a single todo item by its ID.")]
    pub async fn get_todo(
        &self,
        params: Parameters<TodoIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let todo = self
            .todos
            .get(params.0.todo_id)
            .await
            .map_err(map_todo_error)?;
        json_result(&todo)
    }

    #[tool(description = "Create a new todo item. New items start with completed = false.")]
    pub async fn create_todo(
        &self,
        params: Parameters<NewTodo>,
    ) -> Result<CallToolResult, McpError> {
        let created = self.todos.create(params.0).await.map_err(map_todo_error)?;
        json_result(&created)
    }

    #[tool(
        description = "Update an existing todo item. Only the fields provided (content, completed) are changed."
    )]
    pub async fn update_todo(
        &self,
        params: Parameters<UpdateTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateTodoParams { todo_id, changes } = params.0;
        let updated = self
            .todos
            .update(todo_id, changes)
            .await
            .map_err(map_todo_error)?;
        json_result(&updated)
    }

    #[tool(description = "Delete a todo item permanently by its ID.")]
    pub async fn delete_todo(
        &self,
        params: Parameters<TodoIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.todos
            .delete(params.0.todo_id)
            .await
            .map_err(map_todo_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Todo {} deleted successfully",
            params.0.todo_id
        ))]))
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization failed: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Map service errors onto MCP error data.
pub(crate) fn map_todo_error(e: TodoError) -> McpError {
    match e {
        TodoError::Validation { field, message } => McpError::invalid_params(
            format!("Invalid {}: {}", field, message),
            Some(json!({"field": field})),
        ),
        TodoError::NotFound { id } => McpError::resource_not_found(
            "todo_not_found",
            Some(json!({"todo_id": id, "error": format!("Todo {} not found", id)})),
        ),
        // Details were already logged by the service
        TodoError::Storage(_) => McpError::internal_error("storage_error", None),
    }
}
