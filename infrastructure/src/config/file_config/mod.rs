//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application
//! parameters after validation.

mod bridge;
mod demo;
mod output;
mod repl;

pub use bridge::FileBridgeConfig;
pub use demo::FileDemoConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use bridge_application::{ChatParams, DemoParams};
use bridge_domain::{DomainError, normalize_base_url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that make a loaded configuration unusable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("bridge.base_url: {0}")]
    BaseUrl(DomainError),

    #[error("demo.message: {0}")]
    DemoMessage(DomainError),

    #[error("repl.prompt cannot be empty")]
    EmptyPrompt,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Bridge connection settings
    pub bridge: FileBridgeConfig,
    /// Demonstration sequence settings
    pub demo: FileDemoConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration.
    ///
    /// Checks that the base URL is an http(s) URL, the demonstration
    /// message is non-blank and the prompt is non-empty.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        normalize_base_url(&self.bridge.base_url).map_err(ConfigValidationError::BaseUrl)?;

        if self.demo.message.trim().is_empty() {
            return Err(ConfigValidationError::DemoMessage(DomainError::EmptyMessage));
        }

        if self.repl.prompt.is_empty() {
            return Err(ConfigValidationError::EmptyPrompt);
        }

        Ok(())
    }

    /// Canonical base URL (validated, no trailing slash)
    pub fn base_url(&self) -> Result<String, ConfigValidationError> {
        normalize_base_url(&self.bridge.base_url).map_err(ConfigValidationError::BaseUrl)
    }

    pub fn demo_params(&self) -> DemoParams {
        DemoParams::default()
            .with_message(self.demo.message.trim())
            .with_model_preview_limit(self.demo.model_preview_limit)
            .with_model(self.bridge.model_selector())
            .health_only(self.demo.health_only)
    }

    pub fn chat_params(&self) -> ChatParams {
        ChatParams::default()
            .with_prompt(self.repl.prompt.clone())
            .with_model(self.bridge.model_selector())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
