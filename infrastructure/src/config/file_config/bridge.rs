//! Bridge connection configuration from TOML (`[bridge]` section)

use bridge_domain::{DEFAULT_BASE_URL, ModelSelector};
use serde::{Deserialize, Serialize};

/// Raw bridge configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBridgeConfig {
    /// Base URL of the editor extension's HTTP API
    pub base_url: String,
    /// Model selector attached to every chat request (`[bridge.model]`)
    pub model: Option<ModelSelector>,
}

impl Default for FileBridgeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: None,
        }
    }
}

impl FileBridgeConfig {
    /// The configured selector, ignoring one with no fields set
    pub fn model_selector(&self) -> Option<ModelSelector> {
        self.model.clone().filter(|selector| !selector.is_empty())
    }
}
