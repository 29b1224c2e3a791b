//! MCP boundary types
//!
//! Shared types crossing the session boundary. `ChannelError` keeps rmcp's
//! error types out of the rest of the crate.

use serde_json::Value;
use thiserror::Error;

/// A tool advertised by the connected server
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Tool name, unique within the session
    pub name: String,
    /// Tool description
    pub description: Option<String>,
    /// Input schema (JSON)
    pub input_schema: Option<Value>,
}

/// Rendered response from a tool call
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    /// Text blocks in server order; non-text content is debug-formatted
    pub blocks: Vec<String>,
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![text.into()],
        }
    }

    /// Join blocks for display
    pub fn render(&self) -> String {
        self.blocks.join("\n")
    }
}

/// Errors raised at the channel boundary
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Server script must be a .py or .js file")]
    UnsupportedScript,

    #[error("failed to spawn server process: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("failed to initialize server session: {0}")]
    Connect(String),

    #[error("{0}")]
    Rpc(String),
}
