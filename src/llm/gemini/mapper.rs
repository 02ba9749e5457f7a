//! Mapping between prompts and Gemini types

use crate::llm::core::{
    config::GenerationConfig,
    error::{ErrorKind, ProviderError},
};

use super::types::{
    Content, GeminiGenerationConfig, GenerateContentRequest, GenerateContentResponse, Part,
};

/// Build a single-turn generateContent request
pub fn to_gemini_request(prompt: &str, config: &GenerationConfig) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: Some(prompt.to_string()),
            }],
        }],
        generation_config: Some(GeminiGenerationConfig {
            max_output_tokens: Some(config.max_tokens),
            temperature: config.temperature,
        }),
    }
}

/// Extract the text of the first candidate
///
/// A prompt rejected by Gemini's safety filters comes back without
/// candidates and is reported as an error rather than as empty text.
pub fn from_gemini_response(response: GenerateContentResponse) -> Result<String, ProviderError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(ProviderError::new(
            ErrorKind::Unknown,
            format!("Prompt blocked by Gemini ({})", reason),
        ));
    }

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    Ok(text)
}
