use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcp_client::catalog::ToolCatalog;
use mcp_client::mcp::Session;
use mcp_client::menu::Menu;
use mcp_client::output::{self, OutputEvent};
use mcp_client::prompt::Console;

#[derive(Parser)]
#[command(name = "mcp-client")]
#[command(about = "Interactive CLI client for MCP tool servers")]
struct Cli {
    /// Path to the server launch script (.py or .js)
    server_script: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let session = Session::connect(&cli.server_script)
        .await
        .context("Failed to connect to MCP server")?;

    // The session is closed on every path past this point
    let result = run(&session).await;
    if let Err(e) = session.close().await {
        tracing::warn!("Failed to close MCP session: {}", e);
    }
    result
}

async fn run(session: &Session) -> Result<()> {
    let tools = session
        .list_tools()
        .await
        .context("Failed to list tools")?;

    let output = output::default_output();
    let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
    output.write(OutputEvent::NewLine);
    output.write(OutputEvent::System(format!(
        "Connected to server with tools: [{}]",
        names.join(", ")
    )));

    let catalog = ToolCatalog::new(tools);
    let mut menu = Menu::new(&catalog, session, Console::new(), output.as_ref());
    menu.run().await
}
