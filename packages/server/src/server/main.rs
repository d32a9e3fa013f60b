// Main entry point for the extraction server

use anyhow::{Context, Result};
use server_core::{server::build_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,kgraph=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Korean knowledge graph server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    if config.google_api_key.is_some() {
        tracing::info!("Default Gemini key loaded from environment");
    } else {
        tracing::info!("No default Gemini key; requests must carry their own");
    }

    // Build application
    let app = build_app(AppState::from_config(&config));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("UI: http://localhost:{}/", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
