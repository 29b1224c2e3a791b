//! Terminal output with colors
//!
//! Uses ANSI escape codes for colors and styling.

use std::io::{self, Write};

use super::{OutputEvent, OutputWriter};

// ANSI color codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GRAY: &str = "\x1b[90m";

/// Terminal output writer with colors
pub struct TerminalOutput {
    /// Whether to use colors (can be disabled)
    use_colors: bool,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Create without colors
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    fn color(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn styled(&self, codes: &[&str], text: &str) -> String {
        if self.use_colors {
            let prefix: String = codes.iter().copied().collect();
            format!("{}{}{}", prefix, text, RESET)
        } else {
            text.to_string()
        }
    }
}

impl OutputWriter for TerminalOutput {
    fn write(&self, event: OutputEvent) {
        match event {
            OutputEvent::Text(text) => {
                println!("{}", text);
            }

            OutputEvent::Error(msg) => {
                eprintln!(
                    "{} {}",
                    self.styled(&[BOLD, RED], "Error:"),
                    self.color(RED, &msg)
                );
            }

            OutputEvent::System(msg) => {
                eprintln!("{}", self.color(GRAY, &msg));
            }

            OutputEvent::NewLine => {
                println!();
            }
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}
