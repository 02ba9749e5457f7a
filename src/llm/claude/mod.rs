//! Claude provider implementation
//!
//! This module provides a client for Anthropic's Messages API.

pub mod client;
pub mod mapper;
pub mod types;

// Re-export commonly used types
pub use client::{ClaudeClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
