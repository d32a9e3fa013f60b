use axum::{extract::State, Json};
use serde::Serialize;

use crate::deps::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    default_model: String,
}

/// Health check endpoint
///
/// The server is stateless, so liveness is the whole story; the response
/// also carries the configured default model.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        default_model: state.default_model.clone(),
    })
}
