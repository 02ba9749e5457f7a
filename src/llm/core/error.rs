//! Error types for the LLM layer

use std::fmt;
use thiserror::Error;

/// Classification of a provider failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The prompt was empty or otherwise unusable
    InvalidInput,
    /// No credential was supplied for the provider
    MissingCredential,
    /// The provider rejected the credential
    Unauthorized,
    /// The provider throttled the request
    RateLimited,
    /// The provider is down or overloaded
    UpstreamUnavailable,
    /// The call did not complete in time
    Timeout,
    /// The provider answered with no text
    EmptyUpstreamResponse,
    /// Anything that could not be classified
    Unknown,
}

impl ErrorKind {
    /// Whether the user can fix this by configuring an API key
    pub fn is_credential_related(&self) -> bool {
        matches!(self, ErrorKind::MissingCredential | ErrorKind::Unauthorized)
    }

    /// Classify an upstream HTTP failure by status code, falling back to
    /// matching on the error message.
    pub fn classify(status: u16, message: &str) -> Self {
        match status {
            401 | 403 => ErrorKind::Unauthorized,
            429 => ErrorKind::RateLimited,
            408 | 504 => ErrorKind::Timeout,
            500..=599 => ErrorKind::UpstreamUnavailable,
            _ => Self::classify_message(message),
        }
    }

    /// Best-effort classification from an error message alone
    pub fn classify_message(message: &str) -> Self {
        let message = message.to_lowercase();
        let contains_any = |needles: &[&str]| needles.iter().any(|n| message.contains(n));

        if contains_any(&["api key", "api_key", "unauthorized", "invalid key", "authentication"]) {
            ErrorKind::Unauthorized
        } else if contains_any(&["rate limit", "rate_limit", "quota", "too many requests"]) {
            ErrorKind::RateLimited
        } else if contains_any(&["timed out", "timeout", "deadline exceeded"]) {
            ErrorKind::Timeout
        } else if contains_any(&["unavailable", "overloaded", "internal error"]) {
            ErrorKind::UpstreamUnavailable
        } else {
            ErrorKind::Unknown
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::MissingCredential => "missing credential",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::RateLimited => "rate limited",
            ErrorKind::UpstreamUnavailable => "upstream unavailable",
            ErrorKind::Timeout => "timeout",
            ErrorKind::EmptyUpstreamResponse => "empty upstream response",
            ErrorKind::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// A classified failure from a single provider adapter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ProviderError {
    /// What went wrong
    pub kind: ErrorKind,
    /// Human readable detail
    pub message: String,
}

impl ProviderError {
    /// Create a new provider error
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create an error for an unsuccessful upstream HTTP response
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: ErrorKind::classify(status, &message),
            message: format!("HTTP {}: {}", status, message),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingCredential, message)
    }

    pub fn empty_response(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyUpstreamResponse, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::new(ErrorKind::Unknown, format!("Malformed provider response: {}", err))
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::timeout(err.to_string())
        } else if let Some(status) = err.status() {
            ProviderError::from_status(status.as_u16(), err.to_string())
        } else if err.is_connect() {
            ProviderError::new(ErrorKind::UpstreamUnavailable, err.to_string())
        } else if err.is_decode() {
            ProviderError::new(ErrorKind::Unknown, format!("Malformed provider response: {}", err))
        } else {
            ProviderError::new(ErrorKind::classify_message(&err.to_string()), err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_status() {
        assert_eq!(ErrorKind::classify(401, ""), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::classify(403, ""), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::classify(429, ""), ErrorKind::RateLimited);
        assert_eq!(ErrorKind::classify(500, ""), ErrorKind::UpstreamUnavailable);
        assert_eq!(ErrorKind::classify(503, ""), ErrorKind::UpstreamUnavailable);
        assert_eq!(ErrorKind::classify(504, ""), ErrorKind::Timeout);
        assert_eq!(ErrorKind::classify(404, "model not found"), ErrorKind::Unknown);
    }

    #[test]
    fn test_classify_falls_back_to_message() {
        assert_eq!(
            ErrorKind::classify(400, "API key not valid. Please pass a valid API key."),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            ErrorKind::classify(400, "Resource has been exhausted (e.g. check quota)."),
            ErrorKind::RateLimited
        );
    }

    #[test]
    fn test_classify_message() {
        assert_eq!(ErrorKind::classify_message("Request timed out"), ErrorKind::Timeout);
        assert_eq!(
            ErrorKind::classify_message("Overloaded"),
            ErrorKind::UpstreamUnavailable
        );
        assert_eq!(ErrorKind::classify_message("something odd"), ErrorKind::Unknown);
    }

    #[test]
    fn test_credential_related() {
        assert!(ErrorKind::MissingCredential.is_credential_related());
        assert!(ErrorKind::Unauthorized.is_credential_related());
        assert!(!ErrorKind::RateLimited.is_credential_related());
        assert!(!ErrorKind::Unknown.is_credential_related());
    }

    #[test]
    fn test_from_status() {
        let err = ProviderError::from_status(429, "slow down");
        assert_eq!(err.kind, ErrorKind::RateLimited);
        assert!(err.message.contains("429"));
        assert!(err.message.contains("slow down"));
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::missing_credential("OpenAI API key is not configured");
        assert_eq!(
            err.to_string(),
            "missing credential: OpenAI API key is not configured"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ProviderError = json_err.into();
        assert_eq!(err.kind, ErrorKind::Unknown);
    }
}
