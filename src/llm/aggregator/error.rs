use crate::llm::core::{error::ProviderError, types::ProviderId};

/// Request-level failures of a comparison
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    /// The prompt is unusable; nothing was dispatched
    #[error("{0}")]
    InvalidInput(String),

    /// No provider has an API key, so nothing could be dispatched
    #[error("No API key configured. Add an OpenAI, Anthropic or Gemini API key in settings.")]
    MissingCredential,

    /// Every dispatched provider failed
    #[error("All providers unavailable: {}", describe(.failures))]
    AllProvidersFailed {
        failures: Vec<(ProviderId, ProviderError)>,
    },
}

impl AggregateError {
    /// Whether configuring or fixing an API key would resolve this failure
    pub fn is_credential_related(&self) -> bool {
        match self {
            AggregateError::MissingCredential => true,
            AggregateError::InvalidInput(_) => false,
            AggregateError::AllProvidersFailed { failures } => {
                !failures.is_empty() && failures.iter().all(|(_, e)| e.kind.is_credential_related())
            }
        }
    }
}

fn describe(failures: &[(ProviderId, ProviderError)]) -> String {
    failures
        .iter()
        .map(|(id, err)| format!("{} ({})", id.display_name(), err.kind))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::core::error::ErrorKind;

    #[test]
    fn test_missing_credential_mentions_api_key() {
        assert!(AggregateError::MissingCredential.to_string().contains("API key"));
        assert!(AggregateError::MissingCredential.is_credential_related());
    }

    #[test]
    fn test_all_failed_message_lists_providers() {
        let err = AggregateError::AllProvidersFailed {
            failures: vec![
                (ProviderId::OpenAi, ProviderError::new(ErrorKind::RateLimited, "slow down")),
                (ProviderId::Gemini, ProviderError::new(ErrorKind::Timeout, "too slow")),
            ],
        };

        assert_eq!(
            err.to_string(),
            "All providers unavailable: OpenAI (rate limited), Gemini (timeout)"
        );
        assert!(!err.is_credential_related());
    }

    #[test]
    fn test_all_unauthorized_is_credential_related() {
        let err = AggregateError::AllProvidersFailed {
            failures: vec![(
                ProviderId::Anthropic,
                ProviderError::new(ErrorKind::Unauthorized, "invalid x-api-key"),
            )],
        };

        assert!(err.is_credential_related());
    }
}
