//! Domain models for the todo database.
//!
//! These models are storage-agnostic. The input shapes double as the HTTP
//! request bodies, the OpenAPI schemas and the MCP tool input schemas, so
//! both transports validate against the same definitions.

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct Todo {
    /// Identifier assigned by the database, never reused.
    #[schema(example = 1)]
    pub todo_id: i64,
    /// What needs to be done.
    #[schema(example = "Learn FastAPI")]
    pub content: String,
    /// Whether the todo has been completed.
    #[schema(example = false)]
    pub completed: bool,
}

/// Payload for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct NewTodo {
    #[schema(example = "Learn FastAPI")]
    #[schemars(description = "What needs to be done. Must not be empty.")]
    pub content: String,
}

impl NewTodo {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Partial update for a todo. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct TodoPatch {
    #[schema(example = "Learn FastAPI and MCP")]
    #[schemars(description = "New content (optional). Must not be empty when provided.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[schema(example = true)]
    #[schemars(description = "New completion state (optional).")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
