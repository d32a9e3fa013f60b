//! Pure Gemini REST API client
//!
//! A clean, minimal client for the Google Generative Language API with no
//! domain-specific logic. Supports one-shot text generation via the
//! `generateContent` endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{Content, GeminiClient, GenerateRequest};
//!
//! let client = GeminiClient::from_env()?;
//!
//! let response = client
//!     .generate_content(
//!         GenerateRequest::new("models/gemini-1.5-pro")
//!             .content(Content::user("한 문장으로 답해주세요: 러스트란?"))
//!             .temperature(0.2),
//!     )
//!     .await?;
//!
//! println!("{}", response.text);
//! ```

pub mod error;
pub mod types;

pub use error::{GeminiError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }

    /// Create from environment variable `GOOGLE_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .map_err(|_| GeminiError::Config("GOOGLE_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies or regional endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate a completion.
    ///
    /// Issues exactly one `generateContent` call; no retry, no streaming.
    /// The API key travels in the `x-goog-api-key` header so it never appears
    /// in URLs or logs.
    pub async fn generate_content(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let start = std::time::Instant::now();
        let url = format!("{}/v1beta/{}:generateContent", self.base_url, request.model);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: extract_api_message(&error_text),
            });
        }

        let raw: types::GenerateResponseRaw = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        let assembled = assemble_text(raw, status.as_u16())?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Gemini generate_content"
        );

        Ok(assembled)
    }

    /// One-shot text generation convenience wrapper.
    ///
    /// Wraps `prompt` in a single user turn and returns the completion text.
    pub async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String> {
        let response = self
            .generate_content(
                GenerateRequest::new(model)
                    .content(Content::user(prompt))
                    .temperature(temperature),
            )
            .await?;
        Ok(response.text)
    }
}

/// Pull the human-readable message out of an API error body, falling back to
/// the raw body when it is not the documented envelope.
fn extract_api_message(body: &str) -> String {
    serde_json::from_str::<types::ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_string())
}

/// Assemble the first candidate's text parts into a response.
fn assemble_text(raw: types::GenerateResponseRaw, status: u16) -> Result<GenerateResponse> {
    if let Some(feedback) = &raw.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            return Err(GeminiError::Api {
                status,
                message: format!("prompt blocked: {reason}"),
            });
        }
    }

    let candidate = raw.candidates.into_iter().next().ok_or(GeminiError::Api {
        status,
        message: "no candidates in response".to_string(),
    })?;

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GeminiError::Api {
            status,
            message: "candidate contained no text".to_string(),
        });
    }

    Ok(GenerateResponse {
        text,
        usage: raw.usage_metadata,
    })
}
