//! Extractor trait and the Gemini-backed implementation.
//!
//! One submission is one model call. There is no retry, no chunking, and no
//! partial result: the call either yields a parseable, non-empty entity list
//! or the whole submission fails with a single [`ExtractionError`].

use async_trait::async_trait;
use gemini_client::GeminiClient;
use tracing::{debug, info};

use crate::credentials::GeminiCredentials;
use crate::error::{ExtractionError, Result};
use crate::parse::parse_extraction_response;
use crate::prompt::format_extraction_prompt;
use crate::types::ExtractionResult;

/// Turns Korean text into entity and relation records.
///
/// Implementations wrap a specific model provider. The contract is strict:
/// blank input fails before any external call, and a completion with no
/// entities is a failure, not an empty success.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract entities and relations from `text`.
    async fn extract(&self, text: &str) -> Result<ExtractionResult>;
}

/// Gemini-backed extractor.
///
/// Built per request from the submitting user's credentials; holds no state
/// beyond the HTTP client and the chosen model settings.
pub struct GeminiExtractor {
    client: GeminiClient,
    model: String,
    temperature: f32,
}

impl GeminiExtractor {
    /// Create an extractor from user-supplied credentials.
    ///
    /// Fails with [`ExtractionError::MissingCredential`] when the key is
    /// blank, so the user sees a configuration error rather than an opaque
    /// upstream rejection.
    pub fn new(credentials: &GeminiCredentials) -> Result<Self> {
        let api_key = credentials.api_key.expose();
        if api_key.trim().is_empty() {
            return Err(ExtractionError::MissingCredential);
        }
        Ok(Self {
            client: GeminiClient::new(api_key),
            model: credentials.model.clone(),
            temperature: credentials.temperature,
        })
    }

    /// Point the underlying client at a different API origin.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }

    /// The model this extractor calls.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Extractor for GeminiExtractor {
    async fn extract(&self, text: &str) -> Result<ExtractionResult> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        let prompt = format_extraction_prompt(text);
        debug!(
            model = %self.model,
            text_chars = text.chars().count(),
            "requesting extraction"
        );

        let completion = self
            .client
            .generate_text(&self.model, &prompt, self.temperature)
            .await?;

        let result = parse_extraction_response(&completion)?;
        if result.is_empty() {
            return Err(ExtractionError::Empty);
        }

        info!(
            entities = result.entities.len(),
            relations = result.relations.len(),
            "extraction complete"
        );
        Ok(result)
    }
}
