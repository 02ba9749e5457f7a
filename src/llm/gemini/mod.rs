//! Gemini provider implementation
//!
//! This module provides a client for Google's Gemini `generateContent` API,
//! implementing the LlmProvider trait.

pub mod client;
pub mod mapper;
pub mod types;

// Re-export main types for convenience
pub use client::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
