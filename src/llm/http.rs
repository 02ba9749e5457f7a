//! HTTP plumbing shared by the provider clients

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::llm::core::{
    config::ClientConfig,
    error::{ErrorKind, ProviderError},
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Longest stretch of a non-JSON error body kept in a [`ProviderError`]
const MAX_RAW_ERROR_CHARS: usize = 80;

/// Build the HTTP client used by one provider adapter
pub fn build_client(config: &ClientConfig) -> Result<Client, ProviderError> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| {
            ProviderError::new(ErrorKind::Unknown, format!("Failed to create HTTP client: {}", e))
        })
}

/// Error envelope used by the OpenAI, Anthropic and Gemini APIs alike
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pull the human readable message out of an upstream error body
///
/// Bodies that are not a JSON error envelope (HTML error pages from a proxy,
/// say) are cut to the first [`MAX_RAW_ERROR_CHARS`] characters.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "no response body".to_string(),
        Err(_) => truncate(body.trim(), MAX_RAW_ERROR_CHARS),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}…", &text[..end]),
        None => text.to_string(),
    }
}

/// Send a prepared request and decode a successful JSON response
///
/// Non-2xx responses are turned into a classified [`ProviderError`].
pub async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ProviderError> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_else(|_| String::new());
        return Err(ProviderError::from_status(status.as_u16(), error_message(&body)));
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
