use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct SampleResponse {
    text: &'static str,
}

/// Built-in sample article for the "샘플 텍스트 불러오기" button.
pub async fn sample_handler() -> Json<SampleResponse> {
    Json(SampleResponse {
        text: kgraph::SAMPLE_TEXT,
    })
}
