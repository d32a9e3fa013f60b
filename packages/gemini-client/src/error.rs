//! Error types for the Gemini client.

use thiserror::Error;

/// Result type for Gemini client operations.
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Gemini client errors.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, blocked prompt, empty candidate list)
    #[error("Gemini API error ({status}): {message}")]
    Api {
        /// HTTP status returned by the API
        status: u16,
        /// Message extracted from the error body, or the raw body
        message: String,
    },

    /// Parse error (undecodable response body)
    #[error("Parse error: {0}")]
    Parse(String),
}
