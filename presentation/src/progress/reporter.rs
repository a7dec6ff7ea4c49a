//! Progress reporting for the demonstration and the interactive loop

use crate::ConsoleFormatter;
use bridge_application::{
    ChatCheck, ChatObserver, ChatTurn, DemoObserver, DemoStep, LoopExit, TransportResult,
};
use bridge_domain::{HealthStatus, ModelList};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Prints each demonstration step as it completes
pub struct DemoReporter;

impl DemoObserver for DemoReporter {
    fn on_step_start(&self, step: DemoStep) {
        println!();
        println!("{}", ConsoleFormatter::step_header(step));
    }

    fn on_health(&self, result: &TransportResult<HealthStatus>) {
        println!("{}", ConsoleFormatter::health(result));
    }

    fn on_models(&self, result: &TransportResult<ModelList>, preview_limit: usize) {
        println!("{}", ConsoleFormatter::models(result, preview_limit));
    }

    fn on_demo_chat(&self, check: &ChatCheck) {
        println!("{}", ConsoleFormatter::demo_chat(check));
    }
}

/// Prints chat turns, with a spinner while a request is in flight
pub struct ChatReporter {
    show_progress: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ChatReporter {
    pub fn new() -> Self {
        Self {
            show_progress: true,
            spinner: Mutex::new(None),
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn clear_spinner(&self) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ChatReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatObserver for ChatReporter {
    fn on_request_start(&self, _content: &str) {
        if !self.show_progress {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Waiting for the model...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_turn(&self, turn: &ChatTurn) {
        self.clear_spinner();
        println!("{}", ConsoleFormatter::turn(turn));
    }

    fn on_read_error(&self, message: &str) {
        eprintln!("{}", ConsoleFormatter::read_error(message));
    }

    fn on_exit(&self, exit: LoopExit) {
        self.clear_spinner();
        match exit {
            LoopExit::Interrupted => println!("\n   👋 Interrupted"),
            LoopExit::InputFailed => eprintln!("   Giving up after repeated input errors"),
            LoopExit::Quit | LoopExit::EndOfInput => {}
        }
    }
}
