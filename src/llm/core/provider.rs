//! Provider trait for LLM implementations

use async_trait::async_trait;
use std::sync::Arc;

use super::{
    config::ClientConfig,
    error::ProviderError,
    types::ProviderId,
};
use crate::llm::auth::Credential;
use crate::llm::claude::ClaudeClient;
use crate::llm::gemini::GeminiClient;
use crate::llm::openai::OpenAiClient;

/// Outcome of a single adapter invocation
pub type ProviderResult = Result<String, ProviderError>;

/// Main interface that all LLM provider adapters must satisfy
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Which provider this adapter talks to
    fn id(&self) -> ProviderId;

    /// Send one prompt upstream and return the raw generated text
    ///
    /// Implementations make exactly one HTTP call and never retry. Input
    /// validation and output normalization happen in [`LlmProvider::invoke`].
    async fn send(&self, prompt: &str, credential: &Credential) -> ProviderResult;

    /// Validate the inputs, call the provider once and normalize its answer
    ///
    /// # Errors
    ///
    /// * `InvalidInput` if the prompt is blank (no network call)
    /// * `MissingCredential` if no usable key is given (no network call)
    /// * `EmptyUpstreamResponse` if the provider answered with no text
    /// * any classified upstream failure from [`LlmProvider::send`]
    async fn invoke(&self, prompt: &str, credential: Option<&Credential>) -> ProviderResult {
        if prompt.trim().is_empty() {
            return Err(ProviderError::invalid_input("Query cannot be empty"));
        }

        let credential = match credential {
            Some(c) if !c.is_blank() => c,
            _ => {
                return Err(ProviderError::missing_credential(format!(
                    "{} API key is not configured",
                    self.id().display_name()
                )))
            }
        };

        let text = self.send(prompt, credential).await?;
        normalize_text(&text).ok_or_else(|| {
            ProviderError::empty_response(format!(
                "No response generated from {}",
                self.id().display_name()
            ))
        })
    }
}

/// Strip surrounding whitespace and control characters; `None` if nothing is left
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c.is_control());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Create a provider adapter for the given provider identity
///
/// # Example
///
/// ```rust,no_run
/// use ai_compare::llm::{create_provider, ClientConfig, ProviderId};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = create_provider(
///     ProviderId::OpenAi,
///     ClientConfig::new("https://api.openai.com", "gpt-3.5-turbo"),
/// )?;
/// # Ok(())
/// # }
/// ```
pub fn create_provider(
    id: ProviderId,
    config: ClientConfig,
) -> Result<Arc<dyn LlmProvider>, ProviderError> {
    match id {
        ProviderId::OpenAi => Ok(Arc::new(OpenAiClient::new(config)?)),
        ProviderId::Anthropic => Ok(Arc::new(ClaudeClient::new(config)?)),
        ProviderId::Gemini => Ok(Arc::new(GeminiClient::new(config)?)),
    }
}
