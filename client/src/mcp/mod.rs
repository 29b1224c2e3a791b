//! MCP session layer
//!
//! Spawns a server subprocess and drives the protocol through rmcp. The rest
//! of the crate only sees `ToolInfo`, `ToolOutput`, and `ChannelError`.

mod session;
mod types;

pub use session::Session;
pub use types::{ChannelError, ToolInfo, ToolOutput};
