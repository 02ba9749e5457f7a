//! OpenAI client implementation

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

use super::mapper::{from_openai_response, to_openai_request};
use super::types::ChatCompletionResponse;

/// Public OpenAI API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Client for the OpenAI Chat Completions API
pub struct OpenAiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Endpoint, model and generation settings
    config: ClientConfig,
}

impl OpenAiClient {
    /// Create a new OpenAI client
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

    fn build_endpoint_url(&self) -> String {
        format!("{}/v1/chat/completions", self.config.base_url)
    }
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    fn id(&self) -> ProviderId {
        ProviderId::OpenAi
    }

    async fn send(&self, prompt: &str, credential: &Credential) -> ProviderResult {
        let request = to_openai_request(prompt, &self.config.model, &self.config.generation);

        debug!(model = %self.config.model, "Sending request to OpenAI API");
        let response: ChatCompletionResponse = send_json(
            self.http_client
                .post(self.build_endpoint_url())
                .bearer_auth(credential.expose())
                .json(&request),
        )
        .await?;

        Ok(from_openai_response(response))
    }
}
