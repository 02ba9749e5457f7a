//! Claude client implementation

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::llm::auth::Credential;
use crate::llm::core::{
    config::ClientConfig,
    error::ProviderError,
    provider::{LlmProvider, ProviderResult},
    types::ProviderId,
};
use crate::llm::http::{build_client, send_json};

use super::mapper::{from_claude_response, to_claude_request};
use super::types::MessagesResponse;

/// Public Anthropic API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "claude-3-opus-20240229";

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for Anthropic's Messages API
pub struct ClaudeClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Endpoint, model and generation settings
    config: ClientConfig,
}

impl ClaudeClient {
    /// Create a new Claude client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ProviderError> {
        let http_client = build_client(&config)?;
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Build the endpoint URL
    fn build_endpoint_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url)
    }
}

#[async_trait]
impl LlmProvider for ClaudeClient {
    fn id(&self) -> ProviderId {
        ProviderId::Anthropic
    }

    async fn send(&self, prompt: &str, credential: &Credential) -> ProviderResult {
        let request = to_claude_request(prompt, &self.config.model, &self.config.generation);

        debug!(model = %self.config.model, "Sending request to Claude API");
        let response: MessagesResponse = send_json(
            self.http_client
                .post(self.build_endpoint_url())
                .header("x-api-key", credential.expose())
                .header("anthropic-version", ANTHROPIC_VERSION)
                .json(&request),
        )
        .await?;

        debug!(id = %response.id, stop_reason = ?response.stop_reason, "Received response from Claude");
        Ok(from_claude_response(response))
    }
}
