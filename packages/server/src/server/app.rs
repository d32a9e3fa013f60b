//! Application setup and server configuration.

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::deps::AppState;
use crate::server::routes::{
    export_handler, extract_handler, health_handler, index_page, sample_handler,
};

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // CORS configuration - allow any origin so the page can be served
    // from a different host than the API during development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health_handler))
        .route("/api/sample", get(sample_handler))
        .route("/api/extract", post(extract_handler))
        .route("/api/export/:format", post(export_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
