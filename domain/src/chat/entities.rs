//! Chat request entities

use crate::catalog::model::ModelSelector;
use serde::{Deserialize, Serialize};

/// A single unit of conversation sent to the bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub content: String,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Body of `POST /api/chat`
///
/// `model` is left out of the JSON entirely when no selector is given, so
/// the bridge picks its own default model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelSelector>,
}

impl ChatRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
        }
    }

    /// A request carrying exactly one message
    pub fn single(content: impl Into<String>) -> Self {
        Self::new(vec![ChatMessage::new(content)])
    }

    /// Ask the bridge for a specific model. Empty selectors are dropped.
    pub fn with_model(mut self, selector: ModelSelector) -> Self {
        self.model = if selector.is_empty() {
            None
        } else {
            Some(selector)
        };
        self
    }
}
