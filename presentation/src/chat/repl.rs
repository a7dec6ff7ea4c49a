//! Interactive chat with the bridge

use crate::{ChatReporter, ConsoleFormatter, RustylineReader};
use bridge_application::{
    BridgeApi, ChatParams, DemoStep, InteractiveChatUseCase, LoopExit, SharedLineReader,
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::debug;
use tokio_util::sync::CancellationToken;

/// Interactive chat REPL
pub struct ChatRepl<B: BridgeApi + 'static> {
    use_case: InteractiveChatUseCase<B>,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl<B: BridgeApi + 'static> ChatRepl<B> {
    pub fn new(bridge: Arc<B>) -> Self {
        Self {
            use_case: InteractiveChatUseCase::new(bridge),
            show_progress: true,
            history_file: None,
        }
    }

    pub fn with_params(mut self, params: ChatParams) -> Self {
        self.use_case = self.use_case.with_params(params);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.use_case = self.use_case.with_cancellation(token);
        self
    }

    /// Set whether to show a spinner while waiting for replies
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run against the terminal
    pub async fn run(&self) -> rustyline::Result<LoopExit> {
        let reader = Arc::new(Mutex::new(RustylineReader::new(self.history_file.clone())?));
        let exit = self.run_with_reader(reader.clone()).await;

        // An interrupted read may still hold the editor
        match reader.try_lock() {
            Ok(mut reader) => reader.save_history(),
            Err(_) => debug!("Line editor still busy, history not saved"),
        }
        Ok(exit)
    }

    /// Run against any line source
    pub async fn run_with_reader(&self, reader: SharedLineReader) -> LoopExit {
        println!();
        println!("{}", ConsoleFormatter::step_header(DemoStep::Interactive));

        let reporter = ChatReporter::new().with_progress(self.show_progress);
        self.use_case.run_with_progress(reader, &reporter).await
    }
}
