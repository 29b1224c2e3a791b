//! Interactive menu loop
//!
//! Explicit state machine over the session: list tools, call a tool, quit.
//! Every recoverable error is reported through the output layer and the
//! loop returns to `Idle`; interruption at any prompt transitions to `Done`
//! with a farewell instead of crashing.

use anyhow::Result;
use serde_json::{Map, Value};

use crate::catalog::ToolCatalog;
use crate::collector::ParamCollector;
use crate::engine::{InvocationEngine, ToolChannel};
use crate::output::{OutputEvent, OutputWriter};
use crate::prompt::Prompter;

/// Menu states; `Done` is terminal
#[derive(Debug, Clone, PartialEq)]
pub enum MenuState {
    Idle,
    ListingTools,
    SelectingTool,
    CollectingParams { tool: String },
    Invoking { tool: String, arguments: Map<String, Value> },
    Done,
}

/// Outcome of resolving the user's tool selection
#[derive(Debug, PartialEq)]
enum Selection {
    Tool(String),
    InvalidNumber,
}

/// Numeric input selects by 1-based index; anything non-numeric is taken
/// literally as a tool name. A number outside the menu range is rejected
/// rather than reinterpreted as a name.
fn resolve_selection(catalog: &ToolCatalog, input: &str) -> Selection {
    match input.parse::<i64>() {
        Ok(n) => {
            let index = usize::try_from(n).unwrap_or(0);
            match catalog.find_by_index(index) {
                Some(tool) => Selection::Tool(tool.name.clone()),
                None => Selection::InvalidNumber,
            }
        }
        Err(_) => Selection::Tool(input.to_string()),
    }
}

/// Top-level interactive loop
pub struct Menu<'a, C: ToolChannel, P: Prompter> {
    catalog: &'a ToolCatalog,
    engine: InvocationEngine<'a, C>,
    prompter: P,
    output: &'a dyn OutputWriter,
}

impl<'a, C: ToolChannel, P: Prompter> Menu<'a, C, P> {
    pub fn new(
        catalog: &'a ToolCatalog,
        channel: &'a C,
        prompter: P,
        output: &'a dyn OutputWriter,
    ) -> Self {
        Self {
            catalog,
            engine: InvocationEngine::new(catalog, channel),
            prompter,
            output,
        }
    }

    /// Run until the user quits or interrupts
    pub async fn run(&mut self) -> Result<()> {
        self.output.write(OutputEvent::NewLine);
        self.output
            .write(OutputEvent::Text("=== MCP Client Menu ===".to_string()));
        self.output
            .write(OutputEvent::Text("1. List available tools".to_string()));
        self.output
            .write(OutputEvent::Text("2. Call a tool".to_string()));
        self.output.write(OutputEvent::Text("3. Quit".to_string()));

        let mut state = MenuState::Idle;
        while state != MenuState::Done {
            state = match self.step(state).await {
                Ok(next) => next,
                Err(e) => {
                    // Report and keep the session alive
                    self.output.write(OutputEvent::NewLine);
                    self.output.write(OutputEvent::Error(e.to_string()));
                    MenuState::Idle
                }
            };
        }

        Ok(())
    }

    /// Execute one transition
    async fn step(&mut self, state: MenuState) -> Result<MenuState> {
        match state {
            MenuState::Idle => self.dispatch_choice().await,
            MenuState::ListingTools => Ok(self.list_tools()),
            MenuState::SelectingTool => self.select_tool().await,
            MenuState::CollectingParams { tool } => self.collect_params(tool).await,
            MenuState::Invoking { tool, arguments } => Ok(self.invoke(tool, arguments).await),
            MenuState::Done => Ok(MenuState::Done),
        }
    }

    async fn dispatch_choice(&mut self) -> Result<MenuState> {
        let Some(choice) = self.prompter.read_line("\nEnter your choice (1-3): ").await? else {
            return Ok(self.farewell());
        };

        match choice.trim() {
            "1" => Ok(MenuState::ListingTools),
            "2" => {
                if self.catalog.is_empty() {
                    self.output.write(OutputEvent::Text(
                        "No tools available. Please connect to a server first.".to_string(),
                    ));
                    return Ok(MenuState::Idle);
                }
                Ok(MenuState::SelectingTool)
            }
            "3" => Ok(self.farewell()),
            _ => {
                self.output.write(OutputEvent::Text(
                    "Invalid choice. Please enter 1, 2, or 3.".to_string(),
                ));
                Ok(MenuState::Idle)
            }
        }
    }

    fn list_tools(&self) -> MenuState {
        self.output.write(OutputEvent::NewLine);
        self.output
            .write(OutputEvent::Text("=== Available Tools ===".to_string()));
        for (i, tool) in self.catalog.list().iter().enumerate() {
            self.output
                .write(OutputEvent::Text(format!("{}. {}", i + 1, tool.name)));
            if let Some(ref desc) = tool.description {
                self.output
                    .write(OutputEvent::Text(format!("   Description: {}", desc)));
            }
            if let Some(ref schema) = tool.input_schema {
                self.output
                    .write(OutputEvent::Text(format!("   Parameters: {}", schema)));
            }
            self.output.write(OutputEvent::NewLine);
        }
        MenuState::Idle
    }

    async fn select_tool(&mut self) -> Result<MenuState> {
        self.output.write(OutputEvent::NewLine);
        self.output
            .write(OutputEvent::Text("Available tools:".to_string()));
        for (i, tool) in self.catalog.list().iter().enumerate() {
            self.output
                .write(OutputEvent::Text(format!("{}. {}", i + 1, tool.name)));
        }

        let Some(input) = self.prompter.read_line("\nEnter tool number or name: ").await? else {
            return Ok(self.farewell());
        };

        match resolve_selection(self.catalog, input.trim()) {
            Selection::Tool(tool) => Ok(MenuState::CollectingParams { tool }),
            Selection::InvalidNumber => {
                self.output
                    .write(OutputEvent::Text("Invalid tool number!".to_string()));
                Ok(MenuState::Idle)
            }
        }
    }

    async fn collect_params(&mut self, tool_name: String) -> Result<MenuState> {
        // An unresolvable name still proceeds to Invoking; the engine
        // produces the error text without a remote call.
        let Some(tool) = self.catalog.find_by_name(&tool_name).cloned() else {
            return Ok(MenuState::Invoking {
                tool: tool_name,
                arguments: Map::new(),
            });
        };

        self.output.write(OutputEvent::NewLine);
        self.output
            .write(OutputEvent::Text(format!("Calling tool: {}", tool.name)));
        if let Some(ref desc) = tool.description {
            self.output
                .write(OutputEvent::Text(format!("Description: {}", desc)));
        }

        let mut collector = ParamCollector::new(&mut self.prompter, self.output);
        match collector.collect(&tool).await? {
            Some(arguments) => Ok(MenuState::Invoking {
                tool: tool_name,
                arguments,
            }),
            None => Ok(self.farewell()),
        }
    }

    async fn invoke(&mut self, tool: String, arguments: Map<String, Value>) -> MenuState {
        let outcome = self.engine.invoke(&tool, arguments).await;
        self.output.write(OutputEvent::NewLine);
        self.output
            .write(OutputEvent::Text(format!("Result:\n{}", outcome.text())));
        MenuState::Idle
    }

    fn farewell(&self) -> MenuState {
        self.output.write(OutputEvent::Text("Goodbye!".to_string()));
        MenuState::Done
    }
}
