//! The HTTP client and the `ResearchApi` seam it implements.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::types::{ChatMessage, ChatResponse, CrimeCase, HealthStatus, SearchRequest};

/// The operations the crime-research backend exposes. Front-ends depend on
/// this trait so a fixture implementation can stand in for the network.
#[async_trait]
pub trait ResearchApi: Send + Sync {
    /// Send one chat message and return the assistant's raw reply.
    async fn send_message(&self, message: &str) -> Result<ChatResponse>;

    /// Search crime cases matching the request filters.
    async fn search_crimes(&self, request: &SearchRequest) -> Result<Vec<CrimeCase>>;

    /// Ping the backend.
    async fn health(&self) -> Result<HealthStatus>;

    /// Predefined search presets keyed by template name.
    async fn search_templates(&self) -> Result<BTreeMap<String, SearchRequest>>;
}

/// reqwest-backed [`ResearchApi`] implementation.
pub struct ResearchClient {
    config: ClientConfig,
    client: Client,
}

impl ResearchClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(ResearchClient { config, client })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Send a chat message with an optional context payload.
    pub async fn chat(&self, message: ChatMessage) -> Result<ChatResponse> {
        let url = self.url("/chat");
        tracing::debug!(url = %url, "sending chat message");

        let response = self.client.post(&url).json(&message).send().await?;
        let response = check_status(response).await?;
        let reply: ChatResponse = response.json().await?;

        tracing::debug!(
            response_len = reply.response.len(),
            sources = reply.sources.as_ref().map(|s| s.len()).unwrap_or(0),
            "chat reply received"
        );
        Ok(reply)
    }
}

#[async_trait]
impl ResearchApi for ResearchClient {
    async fn send_message(&self, message: &str) -> Result<ChatResponse> {
        self.chat(ChatMessage::new(message)).await
    }

    async fn search_crimes(&self, request: &SearchRequest) -> Result<Vec<CrimeCase>> {
        let url = self.url("/search/crimes");
        tracing::debug!(url = %url, focus = %request.geographic_focus, "searching crime cases");

        let response = self.client.post(&url).json(request).send().await?;
        let response = check_status(response).await?;
        let cases: Vec<CrimeCase> = response.json().await?;

        tracing::debug!(count = cases.len(), "search results received");
        Ok(cases)
    }

    async fn health(&self) -> Result<HealthStatus> {
        let url = self.url("/health");
        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn search_templates(&self) -> Result<BTreeMap<String, SearchRequest>> {
        let url = self.url("/search/templates");
        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Map a non-success response to [`ClientError::Api`], extracting the
/// backend's `detail` field when the body carries one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or(body);

    Err(ClientError::Api {
        status: status.as_u16(),
        detail,
    })
}
