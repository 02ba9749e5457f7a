// Shared server state

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::llm::{create_provider, Aggregator, Credentials, ProviderError, ProviderId};

/// State handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    pub fn new(aggregator: Aggregator, credentials: Credentials) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            credentials: Arc::new(credentials),
        }
    }

    /// Build one adapter per provider from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        let providers = ProviderId::ALL
            .into_iter()
            .map(|id| create_provider(id, config.client_config(id).clone()))
            .collect::<Result<Vec<_>, _>>()?;

        for id in ProviderId::ALL {
            info!(
                provider = %id,
                model = %config.client_config(id).model,
                configured = config.credentials.contains(id),
                "Provider registered"
            );
        }

        let aggregator = Aggregator::new(providers).with_timeout(config.provider_timeout);
        Ok(Self::new(aggregator, config.credentials.clone()))
    }

    /// Whether a provider is registered and has an API key
    pub fn is_configured(&self, provider: ProviderId) -> bool {
        self.credentials.contains(provider) && self.aggregator.provider_ids().contains(&provider)
    }
}
