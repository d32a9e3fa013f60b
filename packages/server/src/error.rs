use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kgraph::{ExportError, ExtractionError};
use serde_json::json;

/// API-level error that maps domain failures onto HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("지원하지 않는 내보내기 형식입니다: {0}")]
    UnknownFormat(String),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl ApiError {
    /// HTTP status for this error.
    ///
    /// Client mistakes (empty text, unknown format) map to 4xx, upstream
    /// Gemini failures to 502, and everything else to 500.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Extraction(ExtractionError::MissingCredential) => StatusCode::UNAUTHORIZED,
            ApiError::Extraction(ExtractionError::EmptyInput)
            | ApiError::Extraction(ExtractionError::Parse(_))
            | ApiError::Extraction(ExtractionError::Empty)
            | ApiError::Extraction(ExtractionError::UnknownEntity(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Extraction(ExtractionError::Api(_)) => StatusCode::BAD_GATEWAY,
            ApiError::UnknownFormat(_) => StatusCode::NOT_FOUND,
            ApiError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::warn!(%status, error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
