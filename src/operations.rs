//! Operation catalog.
//!
//! One entry per CRUD operation, pairing the MCP tool name with the HTTP
//! route that carries the same contract and the service call behind both.
//! The HTTP todo routes are registered from this table, the MCP server
//! instructions are built from it, and tests hold the tool router and the
//! OpenAPI document to it.

use std::fmt;

/// HTTP verb of a catalogued route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `TodoService` call an operation is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoOp {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// A single operation exposed over both HTTP and MCP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Tool name, also used as the OpenAPI operation id.
    pub name: &'static str,
    pub op: TodoOp,
    pub method: HttpMethod,
    pub path: &'static str,
    /// Schema name of the request body, if any.
    pub input: Option<&'static str>,
    /// Schema name of the response body, if any.
    pub output: Option<&'static str>,
    pub summary: &'static str,
}

pub const OPERATIONS: [Operation; 5] = [
    Operation {
        name: "get_all_todos",
        op: TodoOp::List,
        method: HttpMethod::Get,
        path: "/todos",
        input: None,
        output: Some("Todo[]"),
        summary: "Retrieve all todo items",
    },
    Operation {
        name: "get_todo",
        op: TodoOp::Get,
        method: HttpMethod::Get,
        path: "/todos/{todo_id}",
        input: None,
        output: Some("Todo"),
        summary: "Retrieve a single todo item by its ID",
    },
    Operation {
        name: "create_todo",
        op: TodoOp::Create,
        method: HttpMethod::Post,
        path: "/todos",
        input: Some("NewTodo"),
        output: Some("Todo"),
        summary: "Create a new todo item",
    },
    Operation {
        name: "update_todo",
        op: TodoOp::Update,
        method: HttpMethod::Put,
        path: "/todos/{todo_id}",
        input: Some("TodoPatch"),
        output: Some("Todo"),
        summary: "Update an existing todo item",
    },
    Operation {
        name: "delete_todo",
        op: TodoOp::Delete,
        method: HttpMethod::Delete,
        path: "/todos/{todo_id}",
        input: None,
        output: None,
        summary: "Delete a todo item by its ID",
    },
];

/// Human-readable listing, one operation per line.
pub fn describe() -> String {
    OPERATIONS
        .iter()
        .map(|op| {
            format!(
                "- {} ({} {}, {} -> {}): {}",
                op.name,
                op.method,
                op.path,
                op.input.unwrap_or("no body"),
                op.output.unwrap_or("no content"),
                op.summary
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
