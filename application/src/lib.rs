//! Application layer for llm-bridge-client
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ChatParams, DemoParams};
pub use ports::{
    bridge_api::{BridgeApi, EndpointEnvelope, TransportError, TransportResult},
    line_input::{LineReader, ReadOutcome, SharedLineReader},
    progress::{ChatObserver, DemoObserver, DemoStep, NoChatProgress, NoDemoProgress},
};
pub use use_cases::interactive_chat::{
    ChatTurn, InteractiveChatUseCase, LineCommand, LoopExit, is_exit_command,
};
pub use use_cases::run_demo::{ChatCheck, DemoOutcome, RunDemoUseCase};
