//! Child-process MCP session
//!
//! One session per run: spawn the server script, initialize the protocol,
//! and keep the connection until `close`.

use std::path::Path;

use async_trait::async_trait;
use rmcp::{
    model::{CallToolRequestParam, RawContent},
    service::RunningService,
    transport::TokioChildProcess,
    RoleClient, ServiceExt,
};
use serde_json::{Map, Value};
use tokio::process::Command;

use super::types::{ChannelError, ToolInfo, ToolOutput};
use crate::engine::ToolChannel;

/// Live connection to a tool-hosting server subprocess
pub struct Session {
    service: RunningService<RoleClient, ()>,
}

impl Session {
    /// Spawn the server script and initialize the MCP handshake.
    ///
    /// The launch command is inferred from the script extension:
    /// `.py` runs under `python`, `.js` under `node`.
    pub async fn connect(script_path: &Path) -> Result<Self, ChannelError> {
        let command = match script_path.extension().and_then(|e| e.to_str()) {
            Some("py") => "python",
            Some("js") => "node",
            _ => return Err(ChannelError::UnsupportedScript),
        };

        tracing::debug!("Spawning MCP server: {} {}", command, script_path.display());

        let mut cmd = Command::new(command);
        cmd.arg(script_path);

        let transport = TokioChildProcess::new(cmd)?;
        let service = ()
            .serve(transport)
            .await
            .map_err(|e| ChannelError::Connect(e.to_string()))?;

        Ok(Self { service })
    }

    /// List the tools the server advertises, in server order
    pub async fn list_tools(&self) -> Result<Vec<ToolInfo>, ChannelError> {
        let response = self
            .service
            .list_tools(Default::default())
            .await
            .map_err(|e| ChannelError::Rpc(e.to_string()))?;

        let tools = response
            .tools
            .into_iter()
            .map(|t| ToolInfo {
                name: t.name.to_string(),
                description: t.description.map(|d| d.to_string()),
                input_schema: Some(serde_json::to_value(&t.input_schema).unwrap_or_default()),
            })
            .collect();

        Ok(tools)
    }

    /// Close the session and reap the server process
    pub async fn close(self) -> Result<(), ChannelError> {
        tracing::debug!("Closing MCP session");
        self.service
            .cancel()
            .await
            .map_err(|e| ChannelError::Rpc(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ToolChannel for Session {
    async fn call_tool(
        &self,
        name: &str,
        arguments: Option<Map<String, Value>>,
    ) -> Result<ToolOutput, ChannelError> {
        tracing::debug!("Calling tool: {}", name);

        let result = self
            .service
            .call_tool(CallToolRequestParam {
                name: name.to_string().into(),
                arguments,
                task: None,
            })
            .await
            .map_err(|e| ChannelError::Rpc(e.to_string()))?;

        let blocks = result
            .content
            .iter()
            .map(|content| match &content.raw {
                RawContent::Text(text) => text.text.to_string(),
                other => format!("{:?}", other),
            })
            .collect();

        Ok(ToolOutput { blocks })
    }
}
