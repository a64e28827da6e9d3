//! Gemini REST data transfer objects.
//!
//! Field names follow the wire format (camelCase). Every response field
//! defaults when absent so a sparse envelope still decodes; missing content
//! is handled by [`GenerateContentResponse::into_raw_completion`].

use derive_getters::Getters;
use playtime_core::{RawCompletion, ResponseMode};
use serde::{Deserialize, Serialize};

const USER_ROLE: &str = "user";
const JSON_MIME_TYPE: &str = "application/json";

/// A single text part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Getters)]
pub struct Part {
    /// Text content; absent for non-text parts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl Part {
    /// A text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Getters)]
pub struct Content {
    /// Speaker role ("user" or "model")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Ordered parts of the turn
    #[serde(default)]
    parts: Vec<Part>,
}

/// Generation options. Only the response MIME type is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Requested output MIME type, e.g. "application/json"
    response_mime_type: String,
}

/// Request body for `models/{model}:generateContent`.
///
/// # Examples
///
/// ```
/// use playtime_core::ResponseMode;
/// use playtime_models::GenerateContentRequest;
///
/// let body = serde_json::to_value(GenerateContentRequest::new("hi", ResponseMode::Json)).unwrap();
/// assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
/// assert_eq!(body["contents"][0]["parts"][0]["text"], "hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// A single user turn carrying `prompt`.
    ///
    /// JSON mode also asks for native JSON output.
    pub fn new(prompt: &str, mode: ResponseMode) -> Self {
        let generation_config = mode.wants_json_output().then(|| GenerationConfig {
            response_mime_type: JSON_MIME_TYPE.to_string(),
        });
        Self {
            contents: vec![Content {
                role: Some(USER_ROLE.to_string()),
                parts: vec![Part::from_text(prompt)],
            }],
            generation_config,
        }
    }
}

/// One generated answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Getters)]
pub struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

/// Response body from `generateContent`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Getters)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, or `Empty` if any link
    /// in that chain is missing.
    pub fn into_raw_completion(self) -> RawCompletion {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .map_or(RawCompletion::Empty, RawCompletion::Text)
    }
}

impl From<GenerateContentResponse> for RawCompletion {
    fn from(response: GenerateContentResponse) -> Self {
        response.into_raw_completion()
    }
}
