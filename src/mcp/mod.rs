//! Model Context Protocol (MCP) server implementation
//!
//! This module provides an MCP server using the Streamable HTTP transport.
//! It republishes the todo CRUD routes as the tools `get_all_todos`,
//! `get_todo`, `create_todo`, `update_todo` and `delete_todo`.
//!
//! - **server**: protocol handler and tool registry
//! - **tools**: the tool methods and their parameter shapes
//! - **service**: streamable HTTP service for mounting under `/mcp`

pub mod server;
mod service;
pub mod tools;

#[cfg(test)]
mod tools_test;

pub use server::McpServer;
pub use service::create_mcp_service;
