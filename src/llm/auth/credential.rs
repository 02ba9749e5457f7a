//! Provider API keys

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::llm::core::types::ProviderId;

/// Errors raised when a configured API key is malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// The key is empty or whitespace
    #[error("{provider} API key is empty")]
    Blank { provider: ProviderId },

    /// The key does not have the shape the provider issues
    #[error("Invalid {provider} API key format. It should start with \"{expected_prefix}\"")]
    InvalidFormat {
        provider: ProviderId,
        expected_prefix: &'static str,
    },
}

/// An opaque provider secret
///
/// The value is never printed: `Debug` and `masked` only reveal a short prefix.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw key, trimming surrounding whitespace
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// The raw key, for building an outbound request
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// A log-safe rendering of the key
    pub fn masked(&self) -> String {
        let prefix: String = self.0.chars().take(3).collect();
        format!("{}****", prefix)
    }

    /// Check that the key has the shape issued by `provider`
    pub fn validate_for(&self, provider: ProviderId) -> Result<(), CredentialError> {
        if self.is_blank() {
            return Err(CredentialError::Blank { provider });
        }

        let expected_prefix = match provider {
            ProviderId::OpenAi => "sk-",
            ProviderId::Anthropic => "sk-ant-",
            ProviderId::Gemini => return Ok(()),
        };

        if self.0.starts_with(expected_prefix) {
            Ok(())
        } else {
            Err(CredentialError::InvalidFormat {
                provider,
                expected_prefix,
            })
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", self.masked())
    }
}

/// The read-only set of API keys available to one request
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    keys: HashMap<ProviderId, Credential>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key for a provider, replacing any previous one
    pub fn with(mut self, provider: ProviderId, credential: Credential) -> Self {
        self.insert(provider, credential);
        self
    }

    /// Add a key for a provider. Blank keys are ignored.
    pub fn insert(&mut self, provider: ProviderId, credential: Credential) {
        if !credential.is_blank() {
            self.keys.insert(provider, credential);
        }
    }

    pub fn get(&self, provider: ProviderId) -> Option<&Credential> {
        self.keys.get(&provider)
    }

    pub fn contains(&self, provider: ProviderId) -> bool {
        self.keys.contains_key(&provider)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Validate every configured key against its provider's format
    pub fn validate(&self) -> Result<(), CredentialError> {
        for provider in ProviderId::ALL {
            if let Some(credential) = self.get(provider) {
                credential.validate_for(provider)?;
            }
        }
        Ok(())
    }
}
