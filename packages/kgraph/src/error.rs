//! Typed errors for the knowledge-graph library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to keep the taxonomy
//! the application maps to user-facing messages explicit.

use thiserror::Error;

/// Errors that can occur during an extraction call.
///
/// One submission is one call; every variant is total failure for that
/// submission and the caller may simply resubmit.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// No API credential was supplied
    #[error("Gemini API 키가 설정되어 있지 않습니다")]
    MissingCredential,

    /// Input text was empty; checked before any external call
    #[error("분석할 텍스트가 비어 있습니다")]
    EmptyInput,

    /// The model call itself failed (network, credential rejected, blocked)
    #[error("Gemini 호출 실패: {0}")]
    Api(#[from] gemini_client::GeminiError),

    /// The completion could not be parsed into entity/relation records
    #[error("모델 응답을 JSON으로 해석할 수 없습니다: {0}")]
    Parse(#[source] serde_json::Error),

    /// The completion parsed but contained no entities
    #[error("개체 추출에 실패했습니다")]
    Empty,

    /// A relation references an entity id absent from the entity list
    #[error("관계가 존재하지 않는 개체를 참조합니다: {0}")]
    UnknownEntity(String),
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors that can occur while encoding an export payload.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV record encoding failed
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// In-memory buffer flush failed
    #[error("buffer flush failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Encoded payload was not valid UTF-8
    #[error("payload was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
