//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`DemoParams`] — what the demonstration sequence sends and shows
//! - [`ChatParams`] — prompt and model selection for the interactive loop

pub mod chat_params;
pub mod demo_params;

pub use chat_params::ChatParams;
pub use demo_params::DemoParams;
