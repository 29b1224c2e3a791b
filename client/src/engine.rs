//! Invocation engine
//!
//! Resolves a tool against the catalog, delegates the call to the channel,
//! and normalizes both results and failures into displayable text. Failure
//! is an explicit variant of the return type; no channel error escapes
//! past this boundary.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::catalog::ToolCatalog;
use crate::mcp::{ChannelError, ToolOutput};

/// Remote call surface, implemented by the live session and by test mocks
#[async_trait]
pub trait ToolChannel: Send + Sync {
    async fn call_tool(
        &self,
        name: &str,
        arguments: Option<Map<String, Value>>,
    ) -> Result<ToolOutput, ChannelError>;
}

/// Result of one invocation, ready for display
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationOutcome {
    Success(String),
    Failure(String),
}

impl InvocationOutcome {
    /// Displayable text for either variant
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Drives a single tool call against the channel
pub struct InvocationEngine<'a, C: ToolChannel> {
    catalog: &'a ToolCatalog,
    channel: &'a C,
}

impl<'a, C: ToolChannel> InvocationEngine<'a, C> {
    pub fn new(catalog: &'a ToolCatalog, channel: &'a C) -> Self {
        Self { catalog, channel }
    }

    /// Call `tool_name` with the collected value set.
    ///
    /// An unknown tool short-circuits without touching the channel.
    pub async fn invoke(
        &self,
        tool_name: &str,
        arguments: Map<String, Value>,
    ) -> InvocationOutcome {
        if self.catalog.find_by_name(tool_name).is_none() {
            return InvocationOutcome::Failure(format!("Error: Tool '{}' not found", tool_name));
        }

        match self.channel.call_tool(tool_name, Some(arguments)).await {
            Ok(output) => InvocationOutcome::Success(output.render()),
            Err(e) => InvocationOutcome::Failure(format!("Error calling tool: {}", e)),
        }
    }
}
