//! Core types for the LLM comparison layer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an upstream LLM provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// OpenAI chat completions
    #[serde(rename = "openai")]
    OpenAi,
    /// Anthropic Claude messages
    Anthropic,
    /// Google Gemini generateContent
    Gemini,
}

impl ProviderId {
    /// Every supported provider, in response order
    pub const ALL: [ProviderId; 3] = [ProviderId::OpenAi, ProviderId::Anthropic, ProviderId::Gemini];

    /// Identity used for credentials and configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "openai",
            ProviderId::Anthropic => "anthropic",
            ProviderId::Gemini => "gemini",
        }
    }

    /// Human readable provider name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "OpenAI",
            ProviderId::Anthropic => "Claude",
            ProviderId::Gemini => "Gemini",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of a file attached to a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// File name as supplied by the client
    pub name: String,
    /// MIME type, if the client sent one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl Attachment {
    /// Create an attachment descriptor without a content type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
        }
    }

    /// Set the content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// A single user prompt, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
    attachments: Vec<Attachment>,
}

impl Prompt {
    /// Create a prompt from text alone
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachments: Vec::new(),
        }
    }

    /// Attach file descriptors to the prompt
    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    /// The raw query text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attached file descriptors
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// A prompt is blank when its text is whitespace and nothing is attached
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.attachments.is_empty()
    }

    /// Render the text sent upstream: the query followed by the attached file names
    pub fn render(&self) -> String {
        let query = self.text.trim();
        if self.attachments.is_empty() {
            return query.to_string();
        }

        let listing = self
            .attachments
            .iter()
            .map(|a| match &a.content_type {
                Some(content_type) => format!("- {} ({})", a.name, content_type),
                None => format!("- {}", a.name),
            })
            .collect::<Vec<_>>()
            .join("\n");

        if query.is_empty() {
            format!("Attached files:\n{}", listing)
        } else {
            format!("{}\n\nAttached files:\n{}", query, listing)
        }
    }
}
