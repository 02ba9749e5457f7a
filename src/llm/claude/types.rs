//! Claude-specific request and response types
//!
//! These types map directly to the Anthropic Messages API schema.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesRequest {
    /// Model identifier
    pub model: String,
    /// Maximum number of tokens to generate (required)
    pub max_tokens: u32,
    /// Array of messages in the conversation
    pub messages: Vec<ClaudeMessage>,
    /// Temperature (0.0-1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A single message in the Claude conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeMessage {
    /// Role: "user" or "assistant"
    pub role: String,
    /// Plain text content
    pub content: String,
}

/// Response body of a non-streaming messages call
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    /// Message ID
    #[serde(default)]
    pub id: String,
    /// Generated content blocks
    #[serde(default)]
    pub content: Vec<ClaudeContentBlock>,
    /// Why generation stopped
    pub stop_reason: Option<String>,
}

/// A content block in a Claude response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClaudeContentBlock {
    /// Text content
    Text { text: String },
    /// Tool use, thinking and any other block we do not render
    #[serde(other)]
    Other,
}
