//! Output abstraction for the interactive loop
//!
//! Trait-based output decouples what the menu says from how it is rendered.
//! Terminal output adds color; plain output suits pipes and CI.

mod plain;
mod terminal;

pub use plain::PlainOutput;
pub use terminal::TerminalOutput;

/// Events displayed to the user
#[derive(Debug, Clone)]
pub enum OutputEvent {
    /// Plain text message
    Text(String),

    /// Error message
    Error(String),

    /// System message (dimmed, for session info)
    System(String),

    /// New line / separator
    NewLine,
}

/// Trait for writing output events
pub trait OutputWriter: Send + Sync {
    /// Write an output event
    fn write(&self, event: OutputEvent);

    /// Flush any buffered output
    fn flush(&self);
}

/// Create a default output writer based on environment
pub fn default_output() -> Box<dyn OutputWriter> {
    if atty::is(atty::Stream::Stdout) {
        Box::new(TerminalOutput::new())
    } else {
        Box::new(PlainOutput::new())
    }
}
