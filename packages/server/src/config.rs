use anyhow::{Context, Result};
use dotenvy::dotenv;
use kgraph::{SecretString, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the web UI listens on
    pub port: u16,

    /// Server-side default Gemini key. Optional: users normally paste their
    /// own key into the UI, and a per-request key always wins.
    pub google_api_key: Option<SecretString>,

    /// Default model for requests that do not choose one
    pub model: String,

    /// Default sampling temperature
    pub temperature: f32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8501".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            google_api_key: env::var("GOOGLE_API_KEY").ok().map(SecretString::new),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            temperature: match env::var("GEMINI_TEMPERATURE") {
                Ok(raw) => raw
                    .parse()
                    .context("GEMINI_TEMPERATURE must be a valid number")?,
                Err(_) => DEFAULT_TEMPERATURE,
            },
        })
    }
}
