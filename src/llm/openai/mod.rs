//! OpenAI provider implementation
//!
//! This module provides a client for the OpenAI Chat Completions API.

pub mod client;
pub mod mapper;
pub mod types;

pub use client::{OpenAiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
