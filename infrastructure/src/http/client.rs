//! Bridge API client over HTTP

use super::error::{from_body, from_reqwest, from_status};
use async_trait::async_trait;
use bridge_application::{BridgeApi, TransportResult};
use bridge_domain::core::lenient;
use bridge_domain::{
    ChatReply, ChatRequest, DEFAULT_BASE_URL, HealthStatus, ModelList, strip_trailing_slashes,
};
use reqwest::{Client, Response, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

const HEALTH_PATH: &str = "/health";
const MODELS_PATH: &str = "/api/models";
const CHAT_PATH: &str = "/api/chat";
const DOCS_PATH: &str = "/api/docs";

/// [`BridgeApi`] implementation for the editor extension's HTTP server
///
/// No timeouts or retries are configured; each call waits for the
/// transport library's defaults.
#[derive(Debug, Clone)]
pub struct HttpBridgeClient {
    client: Client,
    base_url: String,
}

impl HttpBridgeClient {
    /// Create a client for `base_url`; trailing slashes are removed
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: strip_trailing_slashes(base_url).to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> TransportResult<Value> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(from_reqwest)?;
        Self::decode(response, &url).await
    }

    /// Typed view of a JSON body; fields of an unexpected type are dropped
    fn view<T: DeserializeOwned + Default>(body: Value) -> TransportResult<T> {
        lenient::from_body(body).map_err(from_body)
    }

    /// Reject non-2xx statuses, then parse the body as JSON
    async fn decode(response: Response, url: &str) -> TransportResult<Value> {
        let status = response.status();
        if !status.is_success() {
            debug!("{} answered {}", url, status);
            return Err(from_status(status, url));
        }

        let body = response.text().await.map_err(from_reqwest)?;
        serde_json::from_str(&body).map_err(from_body)
    }
}

impl Default for HttpBridgeClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl BridgeApi for HttpBridgeClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn health_check(&self) -> TransportResult<HealthStatus> {
        Self::view(self.get_json(HEALTH_PATH).await?)
    }

    async fn get_models(&self) -> TransportResult<ModelList> {
        Self::view(self.get_json(MODELS_PATH).await?)
    }

    async fn chat(&self, request: &ChatRequest) -> TransportResult<ChatReply> {
        let url = self.url(CHAT_PATH);
        debug!("POST {} ({} messages)", url, request.messages.len());

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(from_reqwest)?;

        Self::view(Self::decode(response, &url).await?)
    }

    async fn get_docs(&self) -> TransportResult<serde_json::Value> {
        self.get_json(DOCS_PATH).await
    }
}
