//! Gemini API request and response types.
//!
//! Mirrors the `generateContent` wire format of the Generative Language API
//! (`v1beta`). Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

// =============================================================================
// Generate Content request
// =============================================================================

/// A `generateContent` request.
///
/// The model is addressed in the URL path, not the body, so it is skipped
/// during serialization.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Model to use (e.g., "models/gemini-1.5-pro")
    #[serde(skip_serializing)]
    pub model: String,

    /// Conversation turns; a single user turn for one-shot prompts
    pub contents: Vec<Content>,

    /// Sampling configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateRequest {
    /// Create a new request for the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            contents: Vec::new(),
            generation_config: None,
        }
    }

    /// Add a content turn.
    pub fn content(mut self, content: Content) -> Self {
        self.contents.push(content);
        self
    }

    /// Set sampling temperature (0.0 to 1.0).
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .temperature = Some(temperature);
        self
    }

    /// Set the maximum number of output tokens.
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .max_output_tokens = Some(max_output_tokens);
        self
    }
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Role: "user" or "model"
    pub role: String,

    /// Content parts; text-only for this client
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a user turn with a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Create a model turn with a single text part.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A text part of a content turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Part text
    pub text: String,
}

/// Sampling configuration (`generationConfig` on the wire).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature (0.0 to 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus sampling cutoff
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Top-k sampling cutoff
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Maximum tokens in the completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

// =============================================================================
// Generate Content response
// =============================================================================

/// Assembled `generateContent` response.
#[derive(Debug, Clone)]
pub struct GenerateResponse {
    /// Concatenated text of the first candidate's parts
    pub text: String,

    /// Token usage statistics, when the API reports them
    pub usage: Option<UsageMetadata>,
}

/// Raw response from the API (for internal parsing).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateResponseRaw {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
    #[allow(dead_code)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// A part of a candidate; text is absent for non-text parts.
#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// Token usage statistics (`usageMetadata` on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_token_count: u32,

    /// Tokens across returned candidates
    #[serde(default)]
    pub candidates_token_count: u32,

    /// Total tokens billed
    #[serde(default)]
    pub total_token_count: u32,
}

// =============================================================================
// Error body
// =============================================================================

/// Error envelope returned on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub message: String,
    #[allow(dead_code)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_constructors() {
        let user = Content::user("안녕하세요");
        assert_eq!(user.role, "user");
        assert_eq!(user.parts[0].text, "안녕하세요");

        let model = Content::model("answer");
        assert_eq!(model.role, "model");
    }

    #[test]
    fn test_request_builder() {
        let req = GenerateRequest::new("models/gemini-1.5-pro")
            .content(Content::user("hello"))
            .temperature(0.2)
            .max_output_tokens(1024);

        assert_eq!(req.model, "models/gemini-1.5-pro");
        assert_eq!(req.contents.len(), 1);
        let config = req.generation_config.as_ref().unwrap();
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.max_output_tokens, Some(1024));
    }

    #[test]
    fn test_request_serialization_excludes_model() {
        let req = GenerateRequest::new("models/gemini-1.5-pro")
            .content(Content::user("hello"))
            .temperature(0.2);

        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("model").is_none());
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["temperature"], 0.2);
        // unset sampling knobs stay off the wire
        assert!(json["generationConfig"].get("topP").is_none());
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "candidates": [
                {
                    "content": {"parts": [{"text": "part one "}, {"text": "part two"}], "role": "model"},
                    "finishReason": "STOP"
                }
            ],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 34, "totalTokenCount": 46}
        }"#;

        let raw: GenerateResponseRaw = serde_json::from_str(body).unwrap();
        assert_eq!(raw.candidates.len(), 1);
        let usage = raw.usage_metadata.unwrap();
        assert_eq!(usage.total_token_count, 46);
    }

    #[test]
    fn test_error_body_deserialization() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "API key not valid.");
    }
}
