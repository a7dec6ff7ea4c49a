//! Configuration file loading for llm-bridge-client
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LLM_BRIDGE_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./bridge.toml` or `./.bridge.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/llm-bridge-client/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBridgeConfig, FileConfig, FileDemoConfig, FileOutputConfig,
    FileReplConfig,
};
pub use loader::ConfigLoader;
