//! MCP server implementation
//!
//! Coordinates the todo tools and answers protocol-level requests
//! (server info, tool listing, tool calls).

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo, Tool},
    tool_handler,
};

use crate::db::Database;
use crate::operations;
use crate::service::TodoService;

/// Main MCP server coordinator
///
/// Generic over `D: Database` for zero-cost abstraction (no dynamic dispatch).
/// Tool methods live in [`super::tools`]; they call the same
/// [`TodoService`] the HTTP handlers use.
pub struct McpServer<D: Database> {
    pub(super) todos: TodoService<D>,
    tool_router: ToolRouter<Self>,
}

impl<D: Database + 'static> McpServer<D> {
    /// Create a new MCP server over the given database.
    pub fn new(db: impl Into<Arc<D>>) -> Self {
        Self {
            todos: TodoService::new(db),
            tool_router: Self::todo_tool_router(),
        }
    }

    /// Definitions of every registered tool.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

#[tool_handler(router = self.tool_router)]
impl<D: Database + 'static> ServerHandler for McpServer<D> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_server_info(Implementation::new(
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
            ))
            .with_instructions(format!(
                "Todo list server. Each tool mirrors one HTTP route of the Todo List API:\n{}",
                operations::describe()
            ))
    }
}
