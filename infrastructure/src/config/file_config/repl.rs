//! REPL configuration from TOML (`[repl]` section)

use bridge_application::config::chat_params::DEFAULT_PROMPT;
use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Prompt shown before each line
    pub prompt: String,
    /// Show a spinner while waiting for the bridge
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_progress: true,
            history_file: None,
        }
    }
}
