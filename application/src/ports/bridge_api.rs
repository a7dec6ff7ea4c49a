//! Bridge API port
//!
//! Defines the interface for talking to the editor extension's HTTP API.
//!
//! Every operation returns a [`TransportResult`]: `Ok` means the HTTP
//! exchange succeeded and the body decoded, `Err` covers everything that
//! went wrong on the way (connection refused, non-2xx status, malformed
//! JSON). Application-level failures live *inside* the `Ok` body; see
//! [`ChatReply::into_app_result`](bridge_domain::ChatReply::into_app_result).

use async_trait::async_trait;
use bridge_domain::{ChatReply, ChatRequest, HealthStatus, ModelList};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur before a response body reaches the caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP error {code} {reason} for url: {url}")]
    Status {
        code: u16,
        reason: String,
        url: String,
    },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Request failed: {0}")]
    Request(String),
}

impl TransportError {
    /// Whether the bridge could not be reached at all
    pub fn is_unreachable(&self) -> bool {
        matches!(self, TransportError::Connection(_))
    }
}

/// Outer (transport-level) result of a bridge call
pub type TransportResult<T> = Result<T, TransportError>;

/// Gateway for the bridge HTTP API
///
/// This port defines how use cases reach the bridge.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait BridgeApi: Send + Sync {
    /// Base URL requests are issued against, without a trailing slash
    fn base_url(&self) -> &str;

    /// `GET /health`
    async fn health_check(&self) -> TransportResult<HealthStatus>;

    /// `GET /api/models`
    async fn get_models(&self) -> TransportResult<ModelList>;

    /// `POST /api/chat`
    ///
    /// `Ok` only says the bridge answered; inspect the reply's own
    /// `success` flag for the application outcome.
    async fn chat(&self, request: &ChatRequest) -> TransportResult<ChatReply>;

    /// `GET /api/docs`
    async fn get_docs(&self) -> TransportResult<serde_json::Value>;
}

/// Uniform `{success, data}` / `{success, error}` view of a bridge call
///
/// Exactly one of `data` and `error` is populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EndpointEnvelope {
    pub fn from_result<T: Serialize>(result: &TransportResult<T>) -> Self {
        match result {
            Ok(body) => match serde_json::to_value(body) {
                Ok(data) => Self {
                    success: true,
                    data: Some(data),
                    error: None,
                },
                Err(e) => Self::failure(e.to_string()),
            },
            Err(e) => Self::failure(e.to_string()),
        }
    }

    fn failure(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}
