//! Mock bridge and recording observers shared by use case tests.

use crate::ports::bridge_api::{BridgeApi, TransportError, TransportResult};
use crate::ports::line_input::{LineReader, ReadOutcome};
use crate::ports::progress::{ChatObserver, DemoObserver, DemoStep};
use crate::use_cases::interactive_chat::{ChatTurn, LoopExit};
use crate::use_cases::run_demo::ChatCheck;
use async_trait::async_trait;
use bridge_domain::{ChatReply, ChatRequest, HealthStatus, ModelDescriptor, ModelList};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub(crate) fn refused() -> TransportError {
    TransportError::Connection("connection refused".to_string())
}

pub(crate) fn answered(text: &str) -> TransportResult<ChatReply> {
    Ok(ChatReply {
        success: true,
        response: Some(text.to_string()),
        model: Some(ModelDescriptor::new("GPT-4o", "copilot")),
        error: None,
    })
}

pub(crate) fn rejected(error: &str) -> TransportResult<ChatReply> {
    Ok(ChatReply {
        success: false,
        error: Some(error.to_string()),
        ..ChatReply::default()
    })
}

pub(crate) struct MockBridge {
    pub health: TransportResult<HealthStatus>,
    pub models: TransportResult<ModelList>,
    pub replies: Mutex<VecDeque<TransportResult<ChatReply>>>,
    pub requests: Mutex<Vec<ChatRequest>>,
    pub calls: Mutex<Vec<&'static str>>,
    /// Chat requests never complete
    pub hang_chat: bool,
}

impl MockBridge {
    pub fn healthy() -> Self {
        Self {
            health: Ok(HealthStatus {
                status: Some("ok".to_string()),
                timestamp: Some(serde_json::json!("2024-01-01T00:00:00Z")),
            }),
            models: Ok(ModelList {
                count: 4,
                models: (1..=4)
                    .map(|i| ModelDescriptor::new(format!("model-{i}"), "copilot"))
                    .collect(),
            }),
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            hang_chat: false,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            health: Err(refused()),
            models: Err(refused()),
            ..Self::healthy()
        }
    }

    pub fn with_replies(self, replies: Vec<TransportResult<ChatReply>>) -> Self {
        *self.replies.lock().unwrap() = VecDeque::from(replies);
        self
    }

    pub fn chat_contents(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| {
                assert_eq!(r.messages.len(), 1);
                r.messages[0].content.clone()
            })
            .collect()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BridgeApi for MockBridge {
    fn base_url(&self) -> &str {
        "http://mock"
    }

    async fn health_check(&self) -> TransportResult<HealthStatus> {
        self.calls.lock().unwrap().push("health");
        self.health.clone()
    }

    async fn get_models(&self) -> TransportResult<ModelList> {
        self.calls.lock().unwrap().push("models");
        self.models.clone()
    }

    async fn chat(&self, request: &ChatRequest) -> TransportResult<ChatReply> {
        self.calls.lock().unwrap().push("chat");
        self.requests.lock().unwrap().push(request.clone());
        if self.hang_chat {
            return std::future::pending().await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| answered("default reply"))
    }

    async fn get_docs(&self) -> TransportResult<serde_json::Value> {
        self.calls.lock().unwrap().push("docs");
        Ok(serde_json::json!({}))
    }
}

/// Scripted line source
pub(crate) struct ScriptedReader {
    outcomes: VecDeque<ReadOutcome>,
    pub prompts: Vec<String>,
    pub history: Vec<String>,
}

impl ScriptedReader {
    pub fn lines(lines: &[&str]) -> Self {
        Self::outcomes(
            lines
                .iter()
                .map(|l| ReadOutcome::Line(l.to_string()))
                .collect(),
        )
    }

    pub fn outcomes(outcomes: Vec<ReadOutcome>) -> Self {
        Self {
            outcomes: VecDeque::from(outcomes),
            prompts: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn shared(self) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(self))
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome {
        self.prompts.push(prompt.to_string());
        self.outcomes.pop_front().unwrap_or(ReadOutcome::Eof)
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}

/// Reader whose `read_line` blocks until the sender is dropped, like a
/// plain stdin read nobody types into
pub(crate) struct StalledReader {
    release: std::sync::mpsc::Receiver<()>,
}

impl StalledReader {
    pub fn new() -> (std::sync::mpsc::Sender<()>, Self) {
        let (release_tx, release) = std::sync::mpsc::channel();
        (release_tx, Self { release })
    }
}

impl LineReader for StalledReader {
    fn read_line(&mut self, _prompt: &str) -> ReadOutcome {
        let _ = self.release.recv();
        ReadOutcome::Eof
    }
}

#[derive(Default)]
pub(crate) struct RecordingChatObserver {
    pub turns: Mutex<Vec<ChatTurn>>,
    pub read_errors: Mutex<Vec<String>>,
    pub exits: Mutex<Vec<LoopExit>>,
}

impl ChatObserver for RecordingChatObserver {
    fn on_turn(&self, turn: &ChatTurn) {
        self.turns.lock().unwrap().push(turn.clone());
    }

    fn on_read_error(&self, message: &str) {
        self.read_errors.lock().unwrap().push(message.to_string());
    }

    fn on_exit(&self, exit: LoopExit) {
        self.exits.lock().unwrap().push(exit);
    }
}

#[derive(Default)]
pub(crate) struct RecordingDemoObserver {
    pub steps: Mutex<Vec<DemoStep>>,
    pub previews: Mutex<Vec<usize>>,
    pub checks: Mutex<Vec<ChatCheck>>,
}

impl DemoObserver for RecordingDemoObserver {
    fn on_step_start(&self, step: DemoStep) {
        self.steps.lock().unwrap().push(step);
    }

    fn on_health(&self, _result: &TransportResult<HealthStatus>) {}

    fn on_models(&self, _result: &TransportResult<ModelList>, preview_limit: usize) {
        self.previews.lock().unwrap().push(preview_limit);
    }

    fn on_demo_chat(&self, check: &ChatCheck) {
        self.checks.lock().unwrap().push(check.clone());
    }
}
