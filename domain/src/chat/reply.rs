//! Chat replies and their application-level outcome
//!
//! An HTTP 200 from `/api/chat` only means the bridge answered. Whether it
//! actually produced a completion is carried in the body's own `success`
//! flag. [`ChatReply::into_app_result`] turns that flag into an
//! [`AppResult`] so callers cannot forget to look at it.

use crate::catalog::model::ModelDescriptor;
use serde::{Deserialize, Serialize};

const NO_RESPONSE: &str = "No response";
const UNKNOWN_ERROR: &str = "Unknown error";

/// Response body of `POST /api/chat`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default, deserialize_with = "crate::core::lenient::flag")]
    pub success: bool,
    #[serde(
        default,
        deserialize_with = "crate::core::lenient::message",
        skip_serializing_if = "Option::is_none"
    )]
    pub response: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::core::lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub model: Option<ModelDescriptor>,
    /// Non-string errors are kept as their JSON text
    #[serde(
        default,
        deserialize_with = "crate::core::lenient::message",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
}

impl ChatReply {
    /// Interpret the body's `success` flag
    pub fn into_app_result(self) -> AppResult<ChatCompletion> {
        if self.success {
            AppResult::Success(ChatCompletion {
                response: self.response.unwrap_or_else(|| NO_RESPONSE.to_string()),
                model_name: self.model.and_then(|m| m.name),
            })
        } else {
            AppResult::Failure(self.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
        }
    }
}

/// Outcome of the bridge's own business logic (inner success)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppResult<T> {
    Success(T),
    Failure(String),
}

impl<T> AppResult<T> {
    pub fn success(self) -> Option<T> {
        match self {
            AppResult::Success(value) => Some(value),
            AppResult::Failure(_) => None,
        }
    }
}

/// A fulfilled chat request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCompletion {
    pub response: String,
    pub model_name: Option<String>,
}

impl ChatCompletion {
    /// Model name for display, `"Unknown"` when the bridge omitted it
    pub fn model_display(&self) -> &str {
        self.model_name.as_deref().unwrap_or("Unknown")
    }
}
