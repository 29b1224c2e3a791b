//! Interactive line prompting
//!
//! `Prompter` is the seam between the interactive loop and stdin, so menu
//! and collector tests can script their input. The live `Console` reads
//! lines from stdin and maps ctrl-c or EOF to an interruption.

use std::io::{self, Write};

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Source of user input lines
#[async_trait]
pub trait Prompter: Send {
    /// Print `prompt` and wait for one line of input.
    ///
    /// Returns `Ok(None)` when the user interrupts (ctrl-c or EOF); callers
    /// treat that as a request to end the session.
    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Prompter backed by stdin
pub struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

#[async_trait]
impl Prompter for Console {
    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        tokio::select! {
            _ = tokio::signal::ctrl_c() => Ok(None),
            line = self.lines.next_line() => Ok(line?),
        }
    }
}
