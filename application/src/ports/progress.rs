//! Progress notification ports
//!
//! Defines the callbacks use cases fire while they talk to the bridge.
//! Implementations live in the presentation layer and decide how (and
//! whether) to display each event.

use crate::ports::bridge_api::TransportResult;
use crate::use_cases::interactive_chat::{ChatTurn, LoopExit};
use crate::use_cases::run_demo::ChatCheck;
use bridge_domain::{HealthStatus, ModelList};

/// Steps of the demonstration run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoStep {
    Health,
    Models,
    Chat,
    Interactive,
}

impl DemoStep {
    /// 1-based position shown to the user
    pub fn number(&self) -> usize {
        match self {
            DemoStep::Health => 1,
            DemoStep::Models => 2,
            DemoStep::Chat => 3,
            DemoStep::Interactive => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DemoStep::Health => "Testing health endpoint...",
            DemoStep::Models => "Getting available models...",
            DemoStep::Chat => "Testing chat completion...",
            DemoStep::Interactive => "Interactive chat mode (type 'quit' to exit)...",
        }
    }
}

/// Callback for the demonstration sequence
pub trait DemoObserver: Send + Sync {
    /// Called before each step
    fn on_step_start(&self, step: DemoStep);

    /// Called with the outcome of `GET /health`
    fn on_health(&self, result: &TransportResult<HealthStatus>);

    /// Called with the outcome of `GET /api/models`
    fn on_models(&self, result: &TransportResult<ModelList>, preview_limit: usize);

    /// Called with the outcome of the demonstration chat message
    fn on_demo_chat(&self, check: &ChatCheck);
}

/// Callback for the interactive loop
pub trait ChatObserver: Send + Sync {
    /// Called right before a chat request is sent
    fn on_request_start(&self, _content: &str) {}

    /// Called with the outcome of one chat request
    fn on_turn(&self, turn: &ChatTurn);

    /// Called when reading a line failed but the loop keeps going
    fn on_read_error(&self, message: &str);

    /// Called once when the loop ends
    fn on_exit(&self, _exit: LoopExit) {}
}

/// No-op demo observer for when output is not needed
pub struct NoDemoProgress;

impl DemoObserver for NoDemoProgress {
    fn on_step_start(&self, _step: DemoStep) {}
    fn on_health(&self, _result: &TransportResult<HealthStatus>) {}
    fn on_models(&self, _result: &TransportResult<ModelList>, _preview_limit: usize) {}
    fn on_demo_chat(&self, _check: &ChatCheck) {}
}

/// No-op chat observer for when output is not needed
pub struct NoChatProgress;

impl ChatObserver for NoChatProgress {
    fn on_turn(&self, _turn: &ChatTurn) {}
    fn on_read_error(&self, _message: &str) {}
}
