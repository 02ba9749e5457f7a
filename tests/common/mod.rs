//! Shared helpers for the provider integration tests

#![allow(dead_code)]

use std::time::Duration;

use ai_compare::llm::{ClientConfig, Credential, Credentials, ProviderId};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const OPENAI_KEY: &str = "sk-test-openai";
pub const ANTHROPIC_KEY: &str = "sk-ant-test";
pub const GEMINI_KEY: &str = "AIza-test-gemini";

/// Client configuration pointing at a mock server
pub fn client_config(server: &MockServer, model: &str) -> ClientConfig {
    ClientConfig::new(server.uri(), model).with_request_timeout(Duration::from_secs(5))
}

/// Keys for every provider
pub fn all_credentials() -> Credentials {
    Credentials::new()
        .with(ProviderId::OpenAi, Credential::new(OPENAI_KEY))
        .with(ProviderId::Anthropic, Credential::new(ANTHROPIC_KEY))
        .with(ProviderId::Gemini, Credential::new(GEMINI_KEY))
}

pub fn openai_completion(text: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }]
    })
}

pub fn claude_message(text: &str) -> Value {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-opus-20240229",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 5, "output_tokens": 1}
    })
}

pub fn gemini_content(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

pub fn error_body(message: &str) -> Value {
    json!({"error": {"message": message, "type": "error"}})
}
