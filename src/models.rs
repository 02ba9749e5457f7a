// Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};

use crate::llm::{AggregateResponse, Attachment, Prompt, ProviderId};

// A file uploaded alongside the query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileUpload {
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

// POST /api/compare request
#[derive(Debug, Clone, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub files: Vec<FileUpload>,
}

impl CompareRequest {
    /// Build the prompt; file contents stay behind, only descriptors travel on
    pub fn into_prompt(self) -> Prompt {
        let attachments = self
            .files
            .into_iter()
            .map(|file| Attachment {
                name: file.name,
                content_type: file.content_type,
            })
            .collect();

        Prompt::new(self.query).with_attachments(attachments)
    }
}

// POST /api/compare success body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompareResponse {
    pub openai: Option<String>,
    pub gemini: Option<String>,
    pub claude: Option<String>,
}

impl From<&AggregateResponse> for CompareResponse {
    fn from(response: &AggregateResponse) -> Self {
        let text = |id| response.get(id).map(str::to_string);
        Self {
            openai: text(ProviderId::OpenAi),
            gemini: text(ProviderId::Gemini),
            claude: text(ProviderId::Anthropic),
        }
    }
}

// Error body shared by every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// Which providers have an API key configured
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderStatus {
    pub openai: bool,
    pub claude: bool,
    pub gemini: bool,
}

// GET /api/health response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub providers: ProviderStatus,
}
