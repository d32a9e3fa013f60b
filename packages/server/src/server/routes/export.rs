use axum::{
    extract::Path,
    http::header::{self, HeaderName},
    Json,
};

use kgraph::{export, ExportFormat, ExtractionResult};

use crate::error::ApiError;

/// Download one export payload.
///
/// The body is the extraction result the page already holds; the server
/// keeps nothing between requests. Unknown format tags are 404.
pub async fn export_handler(
    Path(tag): Path<String>,
    Json(result): Json<ExtractionResult>,
) -> Result<([(HeaderName, String); 2], String), ApiError> {
    let format = match ExportFormat::parse(&tag) {
        Some(format) => format,
        None => return Err(ApiError::UnknownFormat(tag)),
    };

    let payload = export(&result, format)?;
    tracing::debug!(format = format.tag(), bytes = payload.len(), "export produced");

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", format.filename()),
            ),
        ],
        payload,
    ))
}
