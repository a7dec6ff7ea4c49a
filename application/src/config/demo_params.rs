//! Demonstration parameters: what [`RunDemoUseCase`](crate::use_cases::run_demo::RunDemoUseCase) sends and shows.

use bridge_domain::ModelSelector;

/// Message sent by the demonstration chat step
pub const DEFAULT_DEMO_MESSAGE: &str = "Hello! Please tell me what VS Code is in one sentence.";

/// Number of models listed by the demonstration models step
pub const DEFAULT_MODEL_PREVIEW_LIMIT: usize = 3;

/// Demonstration sequence parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoParams {
    /// Content of the single demonstration chat message.
    pub message: String,
    /// How many models to list after `GET /api/models`.
    pub model_preview_limit: usize,
    /// Model selector attached to the demonstration chat request.
    pub model: Option<ModelSelector>,
    /// Stop after the health check (skip the models and chat steps).
    pub health_only: bool,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            message: DEFAULT_DEMO_MESSAGE.to_string(),
            model_preview_limit: DEFAULT_MODEL_PREVIEW_LIMIT,
            model: None,
            health_only: false,
        }
    }
}

impl DemoParams {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_model_preview_limit(mut self, limit: usize) -> Self {
        self.model_preview_limit = limit;
        self
    }

    pub fn with_model(mut self, model: Option<ModelSelector>) -> Self {
        self.model = model;
        self
    }

    pub fn health_only(mut self, health_only: bool) -> Self {
        self.health_only = health_only;
        self
    }
}
