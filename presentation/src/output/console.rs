//! Console output formatter for bridge results
//!
//! Every method returns the text to print instead of printing it, so the
//! reporters decide where output goes and tests can inspect it.

use bridge_application::{ChatCheck, ChatTurn, DemoStep, TransportResult};
use bridge_domain::{HealthStatus, ModelList};
use colored::Colorize;

const INDENT: &str = "   ";

/// Formats bridge results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Title printed once at startup
    pub fn banner(base_url: &str) -> String {
        format!(
            "{}\n{}\n{} {}",
            "🦀 VS Code LLM Bridge Client Test".bold(),
            "=".repeat(50).cyan(),
            "Bridge:".dimmed(),
            base_url
        )
    }

    pub fn step_header(step: DemoStep) -> String {
        format!("{}. {}", step.number(), step.title()).bold().to_string()
    }

    pub fn health(result: &TransportResult<HealthStatus>) -> String {
        match result {
            Ok(health) => Self::lines(&[
                format!("✅ {}", "Server is running".green()),
                format!("📅 Timestamp: {}", health.timestamp_display()),
            ]),
            Err(e) => Self::lines(&[
                Self::error("Error", &e.to_string()),
                format!("💡 {}", "Make sure the VS Code extension is running!".yellow()),
            ]),
        }
    }

    pub fn models(result: &TransportResult<ModelList>, preview_limit: usize) -> String {
        match result {
            Ok(list) => {
                let mut lines = vec![format!(
                    "✅ {}",
                    format!("Found {} models", list.count).green()
                )];
                lines.extend(list.preview(preview_limit).iter().enumerate().map(|(i, model)| {
                    format!(
                        "🤖 Model {}: {} ({})",
                        i + 1,
                        model.display_name().bold(),
                        model.display_vendor()
                    )
                }));
                Self::lines(&lines)
            }
            Err(e) => Self::lines(&[Self::error("Error", &e.to_string())]),
        }
    }

    pub fn demo_chat(check: &ChatCheck) -> String {
        match check {
            ChatCheck::Answered(completion) => Self::lines(&[
                format!("✅ {}", "Chat completed successfully!".green()),
                format!("💬 Response: {}", completion.response),
                format!("🤖 Model used: {}", completion.model_display()),
            ]),
            ChatCheck::Rejected(message) => Self::lines(&[Self::error("Chat API error", message)]),
            ChatCheck::HttpFailed(e) => Self::lines(&[Self::error("HTTP error", &e.to_string())]),
        }
    }

    pub fn turn(turn: &ChatTurn) -> String {
        match turn {
            ChatTurn::Answered(completion) => {
                Self::lines(&[format!("🤖 {} {}", "LLM:".cyan().bold(), completion.response)])
            }
            ChatTurn::Failed(message) => Self::lines(&[Self::error("Error", message)]),
        }
    }

    pub fn read_error(message: &str) -> String {
        Self::lines(&[Self::error("Unexpected error", message)])
    }

    pub fn completed() -> String {
        format!("\n🎉 {}", "Test completed!".green().bold())
    }

    /// Pretty JSON for `--docs`
    pub fn json(value: &serde_json::Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn error(label: &str, message: &str) -> String {
        format!("❌ {} {}", format!("{}:", label).red().bold(), message)
    }

    /// Indent each entry and join with newlines
    fn lines(lines: &[String]) -> String {
        lines
            .iter()
            .map(|line| format!("{}{}", INDENT, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
