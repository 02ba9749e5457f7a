//! Gemini client implementation

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

use super::mapper::{from_gemini_response, to_gemini_request};
use super::types::GenerateContentResponse;

/// Public Generative Language API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Client for Google's Gemini API
pub struct GeminiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Endpoint, model and generation settings
    config: ClientConfig,
}

impl GeminiClient {
    /// Create a new Gemini client
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
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    async fn send(&self, prompt: &str, credential: &Credential) -> ProviderResult {
        let request = to_gemini_request(prompt, &self.config.generation);

        debug!(model = %self.config.model, "Sending request to Gemini API");
        let response: GenerateContentResponse = send_json(
            self.http_client
                .post(self.build_endpoint_url())
                .header("x-goog-api-key", credential.expose())
                .json(&request),
        )
        .await?;

        from_gemini_response(response)
    }
}
