//! Interactive CLI client for MCP tool servers

pub mod catalog;
pub mod collector;
pub mod engine;
pub mod mcp;
pub mod menu;
pub mod output;
pub mod prompt;
pub mod schema;
