//! rustyline-backed line reader

use bridge_application::{LineReader, ReadOutcome};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use tracing::debug;

/// Terminal line editor with persistent history
pub struct RustylineReader {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl RustylineReader {
    /// Create a reader, loading history from `history_path` if given or the
    /// default data directory otherwise.
    pub fn new(history_path: Option<PathBuf>) -> rustyline::Result<Self> {
        let mut editor = DefaultEditor::new()?;
        let history_path = history_path.or_else(default_history_path);

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Err(e) = editor.load_history(path) {
                debug!("No chat history loaded from {}: {}", path.display(), e);
            }
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Write history back to disk
    pub fn save_history(&mut self) {
        if let Some(ref path) = self.history_path
            && let Err(e) = self.editor.save_history(path)
        {
            debug!("Failed to save chat history to {}: {}", path.display(), e);
        }
    }
}

impl LineReader for RustylineReader {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome {
        match self.editor.readline(prompt) {
            Ok(line) => ReadOutcome::Line(line),
            Err(ReadlineError::Interrupted) => ReadOutcome::Interrupted,
            Err(ReadlineError::Eof) => ReadOutcome::Eof,
            Err(err) => ReadOutcome::Failed(err.to_string()),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("llm-bridge-client").join("history.txt"))
}
