//! Concurrent fan-out across provider adapters
//!
//! The aggregator sends one prompt to every provider that has an API key,
//! waits for all of them to settle and collects the answers by provider.
//! A failing or slow provider never cancels or delays its siblings; the
//! request only fails as a whole when nothing useful came back.

mod error;

pub use error::AggregateError;

use futures::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::llm::auth::{Credential, Credentials};
use crate::llm::core::{
    config::DEFAULT_REQUEST_TIMEOUT,
    error::ProviderError,
    provider::{LlmProvider, ProviderResult},
    types::{Prompt, ProviderId},
};

/// Settled answers of one comparison, keyed by provider
///
/// Every registered provider has an entry, `None` when it failed or was
/// skipped for lack of an API key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateResponse {
    results: BTreeMap<ProviderId, Option<String>>,
    failures: BTreeMap<ProviderId, ProviderError>,
}

impl AggregateResponse {
    /// Text returned by a provider, if it succeeded
    pub fn get(&self, provider: ProviderId) -> Option<&str> {
        self.results.get(&provider).and_then(|r| r.as_deref())
    }

    /// All entries, including failed and skipped providers
    pub fn results(&self) -> &BTreeMap<ProviderId, Option<String>> {
        &self.results
    }

    /// Failures of dispatched providers. Skipped providers are not listed.
    pub fn failures(&self) -> &BTreeMap<ProviderId, ProviderError> {
        &self.failures
    }

    pub fn success_count(&self) -> usize {
        self.results.values().filter(|r| r.is_some()).count()
    }
}

/// Fans a prompt out to a fixed set of provider adapters
pub struct Aggregator {
    providers: Vec<Arc<dyn LlmProvider>>,
    timeout: Duration,
}

impl Aggregator {
    /// Create an aggregator over the given adapters
    ///
    /// Adapters are keyed by [`LlmProvider::id`]; a later adapter with the
    /// same id replaces an earlier one.
    pub fn new(providers: Vec<Arc<dyn LlmProvider>>) -> Self {
        let mut by_id: BTreeMap<ProviderId, Arc<dyn LlmProvider>> = BTreeMap::new();
        for provider in providers {
            by_id.insert(provider.id(), provider);
        }

        Self {
            providers: by_id.into_values().collect(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Set the per-provider deadline (default: 30s)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Identities of the registered adapters
    pub fn provider_ids(&self) -> Vec<ProviderId> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Send `prompt` to every provider with a credential and collect the answers
    ///
    /// # Errors
    ///
    /// * [`AggregateError::InvalidInput`] if the prompt has no text and no
    ///   attachments; no provider is called
    /// * [`AggregateError::MissingCredential`] if no registered provider has
    ///   an API key
    /// * [`AggregateError::AllProvidersFailed`] if every dispatched provider
    ///   failed
    pub async fn compare(
        &self,
        prompt: &Prompt,
        credentials: &Credentials,
    ) -> Result<AggregateResponse, AggregateError> {
        if prompt.is_blank() {
            return Err(AggregateError::InvalidInput("Query is required".to_string()));
        }

        let mut response = AggregateResponse {
            results: self.providers.iter().map(|p| (p.id(), None)).collect(),
            failures: BTreeMap::new(),
        };

        let dispatched: Vec<_> = self
            .providers
            .iter()
            .filter_map(|provider| match credentials.get(provider.id()) {
                Some(credential) => Some((provider, credential)),
                None => {
                    info!(provider = %provider.id(), "No API key configured, skipping provider");
                    None
                }
            })
            .collect();

        if dispatched.is_empty() {
            return Err(AggregateError::MissingCredential);
        }

        let rendered = prompt.render();
        info!(providers = dispatched.len(), "Dispatching prompt");

        let calls = dispatched.into_iter().map(|(provider, credential)| {
            let rendered = rendered.as_str();
            async move {
                let id = provider.id();
                let started = Instant::now();
                let result = self.invoke_with_timeout(provider.as_ref(), rendered, credential).await;
                (id, result, started.elapsed())
            }
        });

        for (id, result, elapsed) in join_all(calls).await {
            let elapsed_ms = elapsed.as_millis() as u64;
            match result {
                Ok(text) => {
                    info!(provider = %id, elapsed_ms, chars = text.len(), "Provider succeeded");
                    response.results.insert(id, Some(text));
                }
                Err(err) => {
                    warn!(provider = %id, elapsed_ms, kind = %err.kind, error = %err.message, "Provider failed");
                    response.failures.insert(id, err);
                }
            }
        }

        if response.success_count() == 0 {
            return Err(AggregateError::AllProvidersFailed {
                failures: response.failures.into_iter().collect(),
            });
        }

        debug!(
            succeeded = response.success_count(),
            failed = response.failures.len(),
            "Comparison complete"
        );
        Ok(response)
    }

    async fn invoke_with_timeout(
        &self,
        provider: &dyn LlmProvider,
        prompt: &str,
        credential: &Credential,
    ) -> ProviderResult {
        match tokio::time::timeout(self.timeout, provider.invoke(prompt, Some(credential))).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::timeout(format!(
                "{} did not respond within {}ms",
                provider.id().display_name(),
                self.timeout.as_millis()
            ))),
        }
    }
}
