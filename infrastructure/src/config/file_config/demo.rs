//! Demonstration configuration from TOML (`[demo]` section)

use bridge_application::config::demo_params::{DEFAULT_DEMO_MESSAGE, DEFAULT_MODEL_PREVIEW_LIMIT};
use serde::{Deserialize, Serialize};

/// Raw demonstration configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDemoConfig {
    /// Message sent by the demonstration chat step
    pub message: String,
    /// Number of models listed after `GET /api/models`
    pub model_preview_limit: usize,
    /// Only run the health check before the interactive loop
    pub health_only: bool,
}

impl Default for FileDemoConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_DEMO_MESSAGE.to_string(),
            model_preview_limit: DEFAULT_MODEL_PREVIEW_LIMIT,
            health_only: false,
        }
    }
}
