//! Mapping between prompts and Claude-specific types

use crate::llm::core::config::GenerationConfig;

use super::types::{ClaudeContentBlock, ClaudeMessage, MessagesRequest, MessagesResponse};

/// Build a single-turn messages request
pub fn to_claude_request(prompt: &str, model: &str, config: &GenerationConfig) -> MessagesRequest {
    MessagesRequest {
        model: model.to_string(),
        max_tokens: config.max_tokens,
        messages: vec![ClaudeMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        temperature: config.temperature,
    }
}

/// Concatenate the text blocks of a response, ignoring everything else
pub fn from_claude_response(response: MessagesResponse) -> String {
    response
        .content
        .into_iter()
        .filter_map(|block| match block {
            ClaudeContentBlock::Text { text } => Some(text),
            ClaudeContentBlock::Other => None,
        })
        .collect::<Vec<_>>()
        .join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_claude_request() {
        let request = to_claude_request("2+2?", "claude-3-opus-20240229", &GenerationConfig::new(1024));
        assert_eq!(request.model, "claude-3-opus-20240229");
        assert_eq!(request.max_tokens, 1024);
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
        assert_eq!(request.messages[0].content, "2+2?");
    }

    #[test]
    fn test_from_claude_response_joins_text_blocks() {
        let response = MessagesResponse {
            id: "msg_1".to_string(),
            content: vec![
                ClaudeContentBlock::Text {
                    text: "The answer ".to_string(),
                },
                ClaudeContentBlock::Other,
                ClaudeContentBlock::Text {
                    text: "is 4.".to_string(),
                },
            ],
            stop_reason: Some("end_turn".to_string()),
        };

        assert_eq!(from_claude_response(response), "The answer is 4.");
    }

    #[test]
    fn test_from_claude_response_without_text() {
        let response = MessagesResponse {
            id: "msg_1".to_string(),
            content: vec![],
            stop_reason: None,
        };

        assert_eq!(from_claude_response(response), "");
    }
}
