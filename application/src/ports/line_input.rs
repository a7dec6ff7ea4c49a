//! Line input port
//!
//! Abstracts the blocking line source behind the interactive loop so the
//! loop can be driven by a real terminal editor or by a scripted reader.
//! The loop reads on its own thread, so readers are shared behind a mutex.

use std::sync::{Arc, Mutex};

/// Result of asking for one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line was entered (without the trailing newline)
    Line(String),
    /// The user pressed Ctrl-C at the prompt
    Interrupted,
    /// Input is exhausted (Ctrl-D or closed stdin)
    Eof,
    /// Reading failed for another reason
    Failed(String),
}

/// Blocking source of input lines
pub trait LineReader {
    /// Show `prompt` and block until a line, an interrupt or end of input
    fn read_line(&mut self, prompt: &str) -> ReadOutcome;

    /// Remember a line that was sent to the bridge
    fn add_history(&mut self, _line: &str) {}
}

/// Reader handle the interactive loop can hand to a reading thread
pub type SharedLineReader = Arc<Mutex<dyn LineReader + Send>>;
