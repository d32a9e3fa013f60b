//! Parsing of model completions into extraction records.
//!
//! The model is told to answer with a fenced JSON object, but completions
//! often arrive with surrounding prose or without the fence. The cascade
//! here tries the fenced block first, then the outermost brace span, then
//! the whole completion.

use crate::error::ExtractionError;
use crate::types::ExtractionResult;

/// Locate the JSON payload inside a model completion.
///
/// Tried in order: a ```json fenced block, the span from the first `{` to
/// the last `}`, the whole trimmed completion. Never fails; the caller's
/// `serde_json` pass decides whether the candidate is actually JSON.
pub fn extract_json_block(response: &str) -> &str {
    let trimmed = response.trim();

    if let Some(start) = trimmed.find("```json") {
        let body_start = start + "```json".len();
        if let Some(end) = trimmed[body_start..].find("```") {
            return trimmed[body_start..body_start + end].trim();
        }
    }

    if let Some(obj_start) = trimmed.find('{') {
        if let Some(obj_end) = trimmed.rfind('}') {
            if obj_end > obj_start {
                return &trimmed[obj_start..=obj_end];
            }
        }
    }

    trimmed
}

/// Parse a model completion into an [`ExtractionResult`].
///
/// A missing `entities` or `relations` key becomes an empty list; anything
/// that is not a JSON object fails as [`ExtractionError::Parse`]. Emptiness
/// is judged by the caller, not here.
pub fn parse_extraction_response(response: &str) -> Result<ExtractionResult, ExtractionError> {
    let json_str = extract_json_block(response);
    serde_json::from_str(json_str).map_err(ExtractionError::Parse)
}
