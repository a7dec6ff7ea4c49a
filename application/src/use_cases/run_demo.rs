//! Run Demo use case
//!
//! Sequences the demonstration calls against the bridge: health check,
//! model listing and one fixed chat message. A failed health check aborts
//! the rest of the sequence since every later call needs a reachable server.

use crate::config::DemoParams;
use crate::ports::bridge_api::{BridgeApi, TransportError, TransportResult};
use crate::ports::progress::{DemoObserver, DemoStep, NoDemoProgress};
use crate::use_cases::shared::{is_cancelled, run_cancellable};
use bridge_domain::{AppResult, ChatCompletion, ChatReply, ChatRequest, preview};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Three-way outcome of a chat call, as the demonstration reports it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCheck {
    /// Both layers succeeded
    Answered(ChatCompletion),
    /// HTTP succeeded but the bridge refused the request
    Rejected(String),
    /// The HTTP exchange itself failed
    HttpFailed(TransportError),
}

impl ChatCheck {
    pub fn from_result(result: TransportResult<ChatReply>) -> Self {
        match result {
            Ok(reply) => match reply.into_app_result() {
                AppResult::Success(completion) => ChatCheck::Answered(completion),
                AppResult::Failure(message) => ChatCheck::Rejected(message),
            },
            Err(e) => ChatCheck::HttpFailed(e),
        }
    }
}

/// How the demonstration sequence ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoOutcome {
    /// All steps ran; the interactive loop may follow
    Completed,
    /// The health check failed; nothing else was attempted
    ServerUnavailable(TransportError),
    /// Cancelled by an interrupt
    Interrupted,
}

impl DemoOutcome {
    /// Whether the interactive loop should be entered afterwards
    pub fn should_continue(&self) -> bool {
        matches!(self, DemoOutcome::Completed)
    }
}

/// Use case for running the demonstration sequence
pub struct RunDemoUseCase<B: BridgeApi + 'static> {
    bridge: Arc<B>,
    params: DemoParams,
    cancellation_token: Option<CancellationToken>,
}

impl<B: BridgeApi + 'static> RunDemoUseCase<B> {
    pub fn new(bridge: Arc<B>) -> Self {
        Self {
            bridge,
            params: DemoParams::default(),
            cancellation_token: None,
        }
    }

    pub fn with_params(mut self, params: DemoParams) -> Self {
        self.params = params;
        self
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the use case without output
    pub async fn execute(&self) -> DemoOutcome {
        self.execute_with_progress(&NoDemoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(&self, observer: &dyn DemoObserver) -> DemoOutcome {
        info!("Running bridge demonstration against {}", self.bridge.base_url());

        // Step 1: Health check
        observer.on_step_start(DemoStep::Health);
        let Some(health) = run_cancellable(&self.cancellation_token, self.bridge.health_check()).await
        else {
            return DemoOutcome::Interrupted;
        };
        observer.on_health(&health);
        if let Err(e) = health {
            if e.is_unreachable() {
                warn!("Bridge at {} is not reachable: {}", self.bridge.base_url(), e);
            } else {
                warn!("Health check failed: {}", e);
            }
            return DemoOutcome::ServerUnavailable(e);
        }

        if self.params.health_only {
            debug!("Skipping models and chat steps");
            return DemoOutcome::Completed;
        }

        // Step 2: Models
        if is_cancelled(&self.cancellation_token) {
            return DemoOutcome::Interrupted;
        }
        observer.on_step_start(DemoStep::Models);
        let Some(models) = run_cancellable(&self.cancellation_token, self.bridge.get_models()).await
        else {
            return DemoOutcome::Interrupted;
        };
        match &models {
            Ok(list) => debug!("Bridge reported {} models", list.count),
            Err(e) => warn!("Listing models failed: {}", e),
        }
        observer.on_models(&models, self.params.model_preview_limit);

        // Step 3: Chat
        if is_cancelled(&self.cancellation_token) {
            return DemoOutcome::Interrupted;
        }
        observer.on_step_start(DemoStep::Chat);
        let request = self.demo_request();
        debug!("Sending demonstration message: {}", preview(&self.params.message, 60));
        let Some(reply) = run_cancellable(&self.cancellation_token, self.bridge.chat(&request)).await
        else {
            return DemoOutcome::Interrupted;
        };
        let check = ChatCheck::from_result(reply);
        if let ChatCheck::Rejected(message) = &check {
            warn!("Bridge rejected demonstration chat: {}", message);
        }
        observer.on_demo_chat(&check);

        DemoOutcome::Completed
    }

    fn demo_request(&self) -> ChatRequest {
        let request = ChatRequest::single(self.params.message.clone());
        match &self.params.model {
            Some(selector) => request.with_model(selector.clone()),
            None => request,
        }
    }
}
