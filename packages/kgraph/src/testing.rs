//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the extraction library
//! without making real Gemini calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{ExtractionError, Result};
use crate::extractor::Extractor;
use crate::types::{Entity, EntityType, ExtractionResult, Relation};

/// A mock extractor for testing.
///
/// Returns deterministic, configurable results keyed by the submitted text.
/// Unknown text falls back to [`sample_result`], so callers that only care
/// about the happy path need no setup at all.
#[derive(Default)]
pub struct MockExtractor {
    /// Predefined results by (trimmed) input text
    results: Arc<RwLock<HashMap<String, ExtractionResult>>>,

    /// Inputs that should fail, with the failure kind
    failures: Arc<RwLock<HashMap<String, MockFailure>>>,

    /// Call tracking for assertions; one entry per `extract` invocation
    calls: Arc<RwLock<Vec<String>>>,
}

/// How a configured input should fail.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Upstream API failure with the given message
    Api(String),

    /// Completion that cannot be parsed as JSON
    Unparseable,

    /// Completion that parsed but contained no entities
    Empty,
}

impl MockFailure {
    fn into_error(self) -> ExtractionError {
        match self {
            MockFailure::Api(message) => ExtractionError::Api(gemini_client::GeminiError::Api {
                status: 400,
                message,
            }),
            MockFailure::Unparseable => ExtractionError::Parse(
                serde_json::from_str::<ExtractionResult>("모델이 JSON이 아닌 답을 했습니다")
                    .unwrap_err(),
            ),
            MockFailure::Empty => ExtractionError::Empty,
        }
    }
}

impl MockExtractor {
    /// Create a mock with default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined result for an input text.
    pub fn with_result(self, text: impl Into<String>, result: ExtractionResult) -> Self {
        self.results
            .write()
            .unwrap()
            .insert(text.into().trim().to_string(), result);
        self
    }

    /// Make an input text fail.
    pub fn with_failure(self, text: impl Into<String>, failure: MockFailure) -> Self {
        self.failures
            .write()
            .unwrap()
            .insert(text.into().trim().to_string(), failure);
        self
    }

    /// Get all inputs this mock was called with.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    async fn extract(&self, text: &str) -> Result<ExtractionResult> {
        let text = text.trim();
        self.calls.write().unwrap().push(text.to_string());

        if text.is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        if let Some(failure) = self.failures.read().unwrap().get(text) {
            return Err(failure.clone().into_error());
        }

        Ok(self
            .results
            .read()
            .unwrap()
            .get(text)
            .cloned()
            .unwrap_or_else(sample_result))
    }
}

/// A small, well-formed result for tests and examples.
///
/// Three entities of distinct categories and two relations connecting them.
pub fn sample_result() -> ExtractionResult {
    ExtractionResult {
        entities: vec![
            Entity::new("E1", "김민수", EntityType::Person)
                .with_description("서울대학교 컴퓨터공학과 교수"),
            Entity::new("E2", "서울대학교", EntityType::Organization)
                .with_description("대한민국의 국립대학"),
            Entity::new("E3", "서울", EntityType::Location).with_description("대한민국의 수도"),
        ],
        relations: vec![
            Relation::new("E1", "E2", "소속")
                .with_sentence("김민수 교수는 서울대학교 컴퓨터공학과 소속이다."),
            Relation::new("E2", "E3", "위치").with_sentence("서울대학교는 서울에 있다."),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_result_is_returned() {
        let scripted = ExtractionResult {
            entities: vec![Entity::new("E1", "네이버", EntityType::Organization)],
            relations: vec![],
        };
        let mock = MockExtractor::new().with_result("네이버 관련 기사", scripted.clone());

        let result = mock.extract("네이버 관련 기사").await.unwrap();
        assert_eq!(result, scripted);

        let calls = mock.calls();
        assert_eq!(calls, vec!["네이버 관련 기사".to_string()]);
    }

    #[tokio::test]
    async fn test_unknown_text_falls_back_to_sample() {
        let mock = MockExtractor::new();
        let result = mock.extract("아무 텍스트").await.unwrap();
        assert_eq!(result, sample_result());
    }

    #[tokio::test]
    async fn test_configured_failures_map_to_errors() {
        let mock = MockExtractor::new()
            .with_failure("a", MockFailure::Api("quota exceeded".into()))
            .with_failure("b", MockFailure::Unparseable)
            .with_failure("c", MockFailure::Empty);

        assert!(matches!(
            mock.extract("a").await.unwrap_err(),
            ExtractionError::Api(_)
        ));
        assert!(matches!(
            mock.extract("b").await.unwrap_err(),
            ExtractionError::Parse(_)
        ));
        assert!(matches!(
            mock.extract("c").await.unwrap_err(),
            ExtractionError::Empty
        ));
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected() {
        let mock = MockExtractor::new();
        assert!(matches!(
            mock.extract("  ").await.unwrap_err(),
            ExtractionError::EmptyInput
        ));
        assert_eq!(mock.calls().len(), 1);
    }

    #[test]
    fn test_sample_result_is_well_formed() {
        let result = sample_result();
        assert!(!result.is_empty());
        assert!(result.validate().is_ok());
    }
}
