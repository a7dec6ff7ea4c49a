//! Interactive loop parameters.

use bridge_domain::ModelSelector;

/// Prompt shown before each line of input
pub const DEFAULT_PROMPT: &str = "   You: ";

/// Interactive loop parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatParams {
    pub prompt: String,
    /// Model selector attached to every chat request.
    pub model: Option<ModelSelector>,
}

impl Default for ChatParams {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            model: None,
        }
    }
}

impl ChatParams {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_model(mut self, model: Option<ModelSelector>) -> Self {
        self.model = model;
        self
    }
}
