//! Todo list service.
//!
//! A small CRUD store for todo items, served over a REST API and exposed to
//! MCP clients as tools. Both transports share [`service::TodoService`], so
//! validation and error semantics are identical whichever way a client
//! connects.

pub mod api;
pub mod db;
pub mod mcp;
pub mod operations;
pub mod service;
