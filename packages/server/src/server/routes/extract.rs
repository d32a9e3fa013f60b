use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use kgraph::{highlight_entities, ExtractionError, ExtractionResult, GraphStats, GraphView};

use crate::deps::AppState;
use crate::error::ApiError;

/// One extraction submission.
///
/// `api_key`, `model`, and `temperature` are optional; absent fields fall
/// back to the server defaults from the environment.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

/// Everything the page needs to render one result.
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    /// Raw entities and relations, echoed back for the export calls
    pub result: ExtractionResult,

    /// vis-network nodes and edges
    pub graph: GraphView,

    /// Counts and density for the metrics strip
    pub stats: GraphStats,

    /// Input text with entity mentions wrapped in colored spans
    pub highlighted_text: String,
}

/// Text in, knowledge graph out. One Gemini call per request.
///
/// Blank text is rejected before the extractor is built so a missing key
/// does not mask the real problem.
pub async fn extract_handler(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(ExtractionError::EmptyInput.into());
    }

    let credentials = state.credentials(
        request.api_key.as_deref(),
        request.model.as_deref(),
        request.temperature,
    )?;
    let extractor = state.provider.for_request(&credentials)?;

    tracing::info!(
        model = %credentials.model,
        chars = text.chars().count(),
        "extraction requested"
    );
    let result = extractor.extract(text).await?;

    let graph = GraphView::from_result(&result);
    let stats = GraphStats::from_result(&result);
    let highlighted_text = highlight_entities(text, &result.entities);

    Ok(Json(ExtractResponse {
        result,
        graph,
        stats,
        highlighted_text,
    }))
}
