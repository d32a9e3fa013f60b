//! Server dependencies (using traits for testability)
//!
//! The Gemini key arrives with each request (or falls back to the server
//! default), so extractors are built per call rather than shared. The
//! provider trait lets tests swap in [`kgraph::MockExtractor`] without
//! touching the network.

use std::sync::Arc;

use kgraph::{ExtractionError, Extractor, GeminiCredentials, GeminiExtractor, SecretString};

use crate::config::Config;

/// Builds an extractor for a single request.
pub trait ExtractorProvider: Send + Sync {
    fn for_request(
        &self,
        credentials: &GeminiCredentials,
    ) -> Result<Arc<dyn Extractor>, ExtractionError>;
}

/// Production provider backed by the real Gemini API.
pub struct GeminiProvider;

impl ExtractorProvider for GeminiProvider {
    fn for_request(
        &self,
        credentials: &GeminiCredentials,
    ) -> Result<Arc<dyn Extractor>, ExtractionError> {
        Ok(Arc::new(GeminiExtractor::new(credentials)?))
    }
}

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ExtractorProvider>,
    /// Server-side fallback key; requests may carry their own.
    pub default_api_key: Option<SecretString>,
    pub default_model: String,
    pub default_temperature: f32,
}

impl AppState {
    /// State for the real server, wired to Gemini.
    pub fn from_config(config: &Config) -> Self {
        Self {
            provider: Arc::new(GeminiProvider),
            default_api_key: config.google_api_key.clone(),
            default_model: config.model.clone(),
            default_temperature: config.temperature,
        }
    }

    /// State with a custom provider and no fallback key, for tests.
    pub fn with_provider(provider: Arc<dyn ExtractorProvider>) -> Self {
        Self {
            provider,
            default_api_key: None,
            default_model: kgraph::DEFAULT_MODEL.to_string(),
            default_temperature: kgraph::DEFAULT_TEMPERATURE,
        }
    }

    /// Resolve per-request overrides against the server defaults.
    ///
    /// A blank key in the body counts as absent; with no fallback configured
    /// the request fails with [`ExtractionError::MissingCredential`].
    pub fn credentials(
        &self,
        api_key: Option<&str>,
        model: Option<&str>,
        temperature: Option<f32>,
    ) -> Result<GeminiCredentials, ExtractionError> {
        let api_key = match api_key.map(str::trim).filter(|key| !key.is_empty()) {
            Some(key) => SecretString::new(key),
            None => self
                .default_api_key
                .clone()
                .ok_or(ExtractionError::MissingCredential)?,
        };
        let model = model
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(&self.default_model)
            .to_string();
        Ok(GeminiCredentials {
            api_key,
            model,
            temperature: temperature.unwrap_or(self.default_temperature),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_default_key(key: Option<&str>) -> AppState {
        AppState {
            provider: Arc::new(GeminiProvider),
            default_api_key: key.map(SecretString::new),
            default_model: kgraph::DEFAULT_MODEL.to_string(),
            default_temperature: kgraph::DEFAULT_TEMPERATURE,
        }
    }

    #[test]
    fn test_request_key_wins_over_default() {
        let state = state_with_default_key(Some("server-key"));
        let creds = state.credentials(Some("user-key"), None, None).unwrap();
        assert_eq!(creds.api_key.expose(), "user-key");
    }

    #[test]
    fn test_blank_request_key_falls_back_to_default() {
        let state = state_with_default_key(Some("server-key"));
        let creds = state.credentials(Some("   "), None, None).unwrap();
        assert_eq!(creds.api_key.expose(), "server-key");
    }

    #[test]
    fn test_no_key_anywhere_is_missing_credential() {
        let state = state_with_default_key(None);
        let err = state.credentials(None, None, None).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingCredential));
    }

    #[test]
    fn test_overrides_applied() {
        let state = state_with_default_key(Some("server-key"));
        let creds = state
            .credentials(None, Some("models/gemini-1.5-pro"), Some(0.7))
            .unwrap();
        assert_eq!(creds.model, "models/gemini-1.5-pro");
        assert!((creds.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_blank_model_falls_back_to_default() {
        let state = state_with_default_key(Some("server-key"));
        let creds = state.credentials(None, Some(""), None).unwrap();
        assert_eq!(creds.model, kgraph::DEFAULT_MODEL);
    }
}
