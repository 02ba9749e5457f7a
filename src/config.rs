//! Server configuration loaded from the environment
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file by the binary. Blank values count as unset.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

use crate::llm::{
    claude, gemini, openai, ClientConfig, Credential, CredentialError, Credentials,
    GenerationConfig, ProviderId,
};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// A configured API key is malformed
    #[error(transparent)]
    Credential(#[from] CredentialError),
}

/// Everything the server needs to start
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
    /// Deadline for each provider call
    pub provider_timeout: Duration,
    /// API keys, validated
    pub credentials: Credentials,
    pub openai: ClientConfig,
    pub claude: ClientConfig,
    pub gemini: ClientConfig,
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = match get("HOST") {
            Some(value) => value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    key: "HOST",
                    value,
                    reason: e.to_string(),
                }
            })?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match get("PORT") {
            Some(value) => value.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: "PORT",
                    value,
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get("PROVIDER_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                Ok(_) => {
                    return Err(ConfigError::InvalidValue {
                        key: "PROVIDER_TIMEOUT_SECS",
                        value,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        key: "PROVIDER_TIMEOUT_SECS",
                        value,
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_PROVIDER_TIMEOUT_SECS,
        };
        let provider_timeout = Duration::from_secs(timeout_secs);

        let mut credentials = Credentials::new();
        for (provider, key) in [
            (ProviderId::OpenAi, "OPENAI_API_KEY"),
            (ProviderId::Anthropic, "ANTHROPIC_API_KEY"),
            (ProviderId::Gemini, "GEMINI_API_KEY"),
        ] {
            if let Some(value) = get(key) {
                credentials.insert(provider, Credential::new(value));
            }
        }
        credentials.validate()?;

        let openai = ClientConfig::new(
            get("OPENAI_BASE_URL").unwrap_or_else(|| openai::DEFAULT_BASE_URL.to_string()),
            get("OPENAI_MODEL").unwrap_or_else(|| openai::DEFAULT_MODEL.to_string()),
        )
        .with_generation(GenerationConfig::new(500).with_temperature(0.7))
        .with_request_timeout(provider_timeout);

        let claude = ClientConfig::new(
            get("ANTHROPIC_BASE_URL").unwrap_or_else(|| claude::DEFAULT_BASE_URL.to_string()),
            get("CLAUDE_MODEL").unwrap_or_else(|| claude::DEFAULT_MODEL.to_string()),
        )
        .with_generation(GenerationConfig::new(1024))
        .with_request_timeout(provider_timeout);

        let gemini = ClientConfig::new(
            get("GEMINI_BASE_URL").unwrap_or_else(|| gemini::DEFAULT_BASE_URL.to_string()),
            get("GEMINI_MODEL").unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string()),
        )
        .with_request_timeout(provider_timeout);

        Ok(Self {
            host,
            port,
            provider_timeout,
            credentials,
            openai,
            claude,
            gemini,
        })
    }

    /// Socket address to bind the server to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Client settings for one provider
    pub fn client_config(&self, provider: ProviderId) -> &ClientConfig {
        match provider {
            ProviderId::OpenAi => &self.openai,
            ProviderId::Anthropic => &self.claude,
            ProviderId::Gemini => &self.gemini,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5000");
        assert_eq!(config.provider_timeout, Duration::from_secs(30));
        assert!(config.credentials.is_empty());
        assert_eq!(config.openai.model, "gpt-3.5-turbo");
        assert_eq!(config.openai.generation.max_tokens, 500);
        assert_eq!(config.openai.generation.temperature, Some(0.7));
        assert_eq!(config.claude.model, "claude-3-opus-20240229");
        assert_eq!(config.claude.generation.max_tokens, 1024);
        assert_eq!(config.gemini.model, "gemini-pro");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("PROVIDER_TIMEOUT_SECS", "5"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("GEMINI_BASE_URL", "http://localhost:9999/"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.provider_timeout, Duration::from_secs(5));
        assert_eq!(config.openai.request_timeout, Duration::from_secs(5));
        assert_eq!(config.client_config(ProviderId::OpenAi).model, "gpt-4o");
        assert_eq!(
            config.client_config(ProviderId::Gemini).base_url,
            "http://localhost:9999"
        );
    }

    #[test]
    fn test_credentials_loaded_and_blank_ignored() {
        let config = load(&[
            ("OPENAI_API_KEY", " sk-test "),
            ("ANTHROPIC_API_KEY", "   "),
            ("GEMINI_API_KEY", "AIza-test"),
        ])
        .unwrap();

        assert_eq!(
            config.credentials.get(ProviderId::OpenAi).map(|c| c.expose()),
            Some("sk-test")
        );
        assert!(!config.credentials.contains(ProviderId::Anthropic));
        assert!(config.credentials.contains(ProviderId::Gemini));
    }

    #[test]
    fn test_invalid_key_format_fails_fast() {
        let err = load(&[("ANTHROPIC_API_KEY", "sk-not-anthropic")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Credential(CredentialError::InvalidFormat {
                provider: ProviderId::Anthropic,
                ..
            })
        ));
        assert!(err.to_string().contains("sk-ant-"));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(matches!(
            load(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidValue { key: "PORT", .. })
        ));
        assert!(matches!(
            load(&[("PROVIDER_TIMEOUT_SECS", "0")]),
            Err(ConfigError::InvalidValue {
                key: "PROVIDER_TIMEOUT_SECS",
                ..
            })
        ));
        assert!(matches!(
            load(&[("HOST", "not-an-ip")]),
            Err(ConfigError::InvalidValue { key: "HOST", .. })
        ));
    }
}
