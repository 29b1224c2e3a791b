//! Interactive parameter collection
//!
//! Walks a tool's declared parameters in schema order, prompting for each
//! and coercing the raw text to its declared type. Required parameters
//! re-prompt until non-empty; unparsable numeric input re-prompts the same
//! parameter; blank optional parameters are recorded as null.

use anyhow::Result;
use serde_json::{Map, Value};

use crate::mcp::ToolInfo;
use crate::output::{OutputEvent, OutputWriter};
use crate::prompt::Prompter;
use crate::schema::{parse_input_schema, Coercion};

/// Collects a value set for one invocation
pub struct ParamCollector<'a, P: Prompter> {
    prompter: &'a mut P,
    output: &'a dyn OutputWriter,
}

impl<'a, P: Prompter> ParamCollector<'a, P> {
    pub fn new(prompter: &'a mut P, output: &'a dyn OutputWriter) -> Self {
        Self { prompter, output }
    }

    /// Gather values for every declared parameter.
    ///
    /// Returns `Ok(None)` if the user interrupts mid-collection. A tool
    /// without declared parameters yields an empty set with no prompts.
    pub async fn collect(&mut self, tool: &ToolInfo) -> Result<Option<Map<String, Value>>> {
        let mut values = Map::new();

        for param in parse_input_schema(tool.input_schema.as_ref()) {
            self.output.write(OutputEvent::NewLine);
            self.output.write(OutputEvent::Text(format!(
                "Parameter: {} ({})",
                param.name,
                param.ty.label()
            )));
            if let Some(ref desc) = param.description {
                self.output
                    .write(OutputEvent::Text(format!("Description: {}", desc)));
            }
            if param.required {
                self.output.write(OutputEvent::Text("(Required)".to_string()));
            }

            loop {
                let prompt = format!("Enter value for {}: ", param.name);
                let Some(raw) = self.prompter.read_line(&prompt).await? else {
                    return Ok(None);
                };
                let raw = raw.trim();

                if raw.is_empty() {
                    if param.required {
                        self.output
                            .write(OutputEvent::Text("This parameter is required!".to_string()));
                        continue;
                    }
                    values.insert(param.name.clone(), Value::Null);
                    break;
                }

                match param.ty.coerce(raw) {
                    Coercion::Value(value) => {
                        values.insert(param.name.clone(), value);
                        break;
                    }
                    Coercion::Null => {
                        values.insert(param.name.clone(), Value::Null);
                        break;
                    }
                    Coercion::Invalid => {
                        self.output.write(OutputEvent::Text(format!(
                            "Invalid {} value. Please try again.",
                            param.ty.label()
                        )));
                    }
                }
            }
        }

        Ok(Some(values))
    }
}
