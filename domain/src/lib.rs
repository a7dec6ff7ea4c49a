//! Domain layer for llm-bridge-client
//!
//! This crate contains the wire types and value objects exchanged with the
//! bridge. It has no dependencies on transport or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Two layers of success
//!
//! Every bridge call has two independent outcomes:
//!
//! - **Outer success**: the HTTP exchange completed (modeled by the
//!   application layer's `TransportResult`)
//! - **Inner success**: the bridge itself fulfilled the request, carried in
//!   the response body and modeled here by [`AppResult`]

pub mod catalog;
pub mod chat;
pub mod core;
pub mod health;

// Re-export commonly used types
pub use catalog::model::{ModelDescriptor, ModelList, ModelSelector};
pub use chat::entities::{ChatMessage, ChatRequest};
pub use chat::reply::{AppResult, ChatCompletion, ChatReply};
pub use crate::core::{
    base_url::{DEFAULT_BASE_URL, normalize_base_url, strip_trailing_slashes},
    error::DomainError,
    string::preview,
};
pub use health::HealthStatus;
