//! Plain text output for pipes and CI environments
//!
//! No colors or special formatting.

use std::io::{self, Write};

use super::{OutputEvent, OutputWriter};

/// Plain text output writer (no colors)
#[derive(Default)]
pub struct PlainOutput;

impl PlainOutput {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for PlainOutput {
    fn write(&self, event: OutputEvent) {
        match event {
            OutputEvent::Text(text) => {
                println!("{}", text);
            }

            OutputEvent::Error(msg) => {
                eprintln!("Error: {}", msg);
            }

            OutputEvent::System(msg) => {
                eprintln!("{}", msg);
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
