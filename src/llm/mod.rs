//! LLM Provider Layer
//!
//! This module provides a uniform adapter interface over OpenAI, Anthropic
//! Claude and Google Gemini, and the aggregator that fans one prompt out to
//! all of them.

pub mod aggregator;
pub mod auth;
pub mod claude;
pub mod core;
pub mod gemini;
pub mod http;
pub mod openai;

// Re-export commonly used types
pub use aggregator::{AggregateError, AggregateResponse, Aggregator};
pub use auth::{Credential, CredentialError, Credentials};
pub use self::core::{
    config::{ClientConfig, GenerationConfig},
    error::{ErrorKind, ProviderError},
    provider::{create_provider, LlmProvider, ProviderResult},
    types::{Attachment, Prompt, ProviderId},
};
