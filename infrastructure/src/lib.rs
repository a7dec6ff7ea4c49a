//! Infrastructure layer for llm-bridge-client
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBridgeConfig, FileConfig, FileDemoConfig,
    FileOutputConfig, FileReplConfig,
};
pub use http::client::HttpBridgeClient;
