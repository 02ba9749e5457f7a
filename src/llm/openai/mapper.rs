//! Mapping between prompts and OpenAI types

use crate::llm::core::config::GenerationConfig;

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Build a single-turn chat completion request
pub fn to_openai_request(prompt: &str, model: &str, config: &GenerationConfig) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: Some(prompt.to_string()),
        }],
        temperature: config.temperature,
        max_tokens: Some(config.max_tokens),
    }
}

/// Text of the first choice, or an empty string if there is none
pub fn from_openai_response(response: ChatCompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default()
}
