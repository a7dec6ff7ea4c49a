//! Interactive Chat use case
//!
//! A read loop: each non-empty line becomes one single-message chat
//! request. `quit`, `exit` and `q` (any case) end the loop, empty lines
//! re-prompt, and an interrupt ends the loop without an error.
//!
//! Lines are read on a dedicated thread. A cancelled token ends the loop
//! even while that thread is still blocked in the read.

use crate::config::ChatParams;
use crate::ports::bridge_api::{BridgeApi, TransportResult};
use crate::ports::line_input::{ReadOutcome, SharedLineReader};
use crate::ports::progress::{ChatObserver, NoChatProgress};
use crate::use_cases::shared::{is_cancelled, run_cancellable};
use bridge_domain::{AppResult, ChatCompletion, ChatReply, ChatRequest, preview};
use std::sync::Arc;
use std::thread;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Lines that end the loop (compared case-insensitively)
pub const EXIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

/// Consecutive read failures tolerated before the loop gives up
const MAX_CONSECUTIVE_READ_FAILURES: usize = 5;

/// Check whether a trimmed line is one of the exit commands
pub fn is_exit_command(line: &str) -> bool {
    EXIT_COMMANDS
        .iter()
        .any(|command| line.eq_ignore_ascii_case(command))
}

/// What a raw input line asks the loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCommand<'a> {
    Exit,
    Skip,
    Send(&'a str),
}

impl<'a> LineCommand<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            LineCommand::Skip
        } else if is_exit_command(line) {
            LineCommand::Exit
        } else {
            LineCommand::Send(line)
        }
    }
}

/// Outcome of one interactive chat request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatTurn {
    Answered(ChatCompletion),
    /// Either layer failed; the message is the body's error when the
    /// bridge answered, otherwise the transport error.
    Failed(String),
}

impl ChatTurn {
    pub fn from_result(result: TransportResult<ChatReply>) -> Self {
        match result {
            Ok(reply) => match reply.into_app_result() {
                AppResult::Success(completion) => ChatTurn::Answered(completion),
                AppResult::Failure(message) => ChatTurn::Failed(message),
            },
            Err(e) => ChatTurn::Failed(e.to_string()),
        }
    }
}

/// Why the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// An exit command was entered
    Quit,
    /// Ctrl-C at the prompt or while a request was in flight
    Interrupted,
    /// Input was exhausted
    EndOfInput,
    /// Reading input kept failing
    InputFailed,
}

/// Use case for the interactive chat loop
pub struct InteractiveChatUseCase<B: BridgeApi + 'static> {
    bridge: Arc<B>,
    params: ChatParams,
    cancellation_token: Option<CancellationToken>,
}

impl<B: BridgeApi + 'static> InteractiveChatUseCase<B> {
    pub fn new(bridge: Arc<B>) -> Self {
        Self {
            bridge,
            params: ChatParams::default(),
            cancellation_token: None,
        }
    }

    pub fn with_params(mut self, params: ChatParams) -> Self {
        self.params = params;
        self
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Run the loop without output
    pub async fn run(&self, reader: SharedLineReader) -> LoopExit {
        self.run_with_progress(reader, &NoChatProgress).await
    }

    /// Run the loop until an exit command, interrupt or end of input
    pub async fn run_with_progress(
        &self,
        reader: SharedLineReader,
        observer: &dyn ChatObserver,
    ) -> LoopExit {
        let exit = self.drive(&reader, observer).await;
        debug!("Interactive loop ended: {:?}", exit);
        observer.on_exit(exit);
        exit
    }

    async fn drive(&self, reader: &SharedLineReader, observer: &dyn ChatObserver) -> LoopExit {
        let mut read_failures = 0;

        loop {
            if is_cancelled(&self.cancellation_token) {
                return LoopExit::Interrupted;
            }

            let Some(outcome) = self.read(reader).await else {
                return LoopExit::Interrupted;
            };
            let raw = match outcome {
                ReadOutcome::Line(line) => {
                    read_failures = 0;
                    line
                }
                ReadOutcome::Interrupted => return LoopExit::Interrupted,
                ReadOutcome::Eof => return LoopExit::EndOfInput,
                ReadOutcome::Failed(message) => {
                    warn!("Failed to read input: {}", message);
                    observer.on_read_error(&message);
                    read_failures += 1;
                    if read_failures >= MAX_CONSECUTIVE_READ_FAILURES {
                        return LoopExit::InputFailed;
                    }
                    continue;
                }
            };

            match LineCommand::parse(&raw) {
                LineCommand::Exit => return LoopExit::Quit,
                LineCommand::Skip => continue,
                LineCommand::Send(content) => {
                    if let Ok(mut reader) = reader.lock() {
                        reader.add_history(content);
                    }
                    match self.send(content, observer).await {
                        Some(turn) => observer.on_turn(&turn),
                        None => return LoopExit::Interrupted,
                    }
                }
            }
        }
    }

    /// Read one line on its own thread.
    ///
    /// Returns `None` if the token fired first. The thread is left to finish
    /// its read in the background.
    async fn read(&self, reader: &SharedLineReader) -> Option<ReadOutcome> {
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let reader = Arc::clone(reader);
        let prompt = self.params.prompt.clone();

        let spawned = thread::Builder::new()
            .name("line-reader".to_string())
            .spawn(move || {
                let outcome = match reader.lock() {
                    Ok(mut reader) => reader.read_line(&prompt),
                    Err(_) => ReadOutcome::Failed("line reader is poisoned".to_string()),
                };
                let _ = outcome_tx.send(outcome);
            });
        if let Err(e) = spawned {
            return Some(ReadOutcome::Failed(e.to_string()));
        }

        let received = run_cancellable(&self.cancellation_token, outcome_rx).await?;
        Some(received.unwrap_or_else(|_| ReadOutcome::Failed("line reader stopped".to_string())))
    }

    /// Send one line as a single-message chat request.
    ///
    /// Returns `None` if the request was interrupted.
    pub async fn send(&self, content: &str, observer: &dyn ChatObserver) -> Option<ChatTurn> {
        let mut request = ChatRequest::single(content);
        if let Some(selector) = &self.params.model {
            request = request.with_model(selector.clone());
        }

        debug!("Sending chat message: {}", preview(content, 60));
        observer.on_request_start(content);

        let result = run_cancellable(&self.cancellation_token, self.bridge.chat(&request)).await?;
        if let Err(e) = &result {
            warn!("Chat request failed: {}", e);
        }
        Some(ChatTurn::from_result(result))
    }
}
