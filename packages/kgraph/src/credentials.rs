//! Credential handling with secure memory.
//!
//! Uses the `secrecy` crate to prevent accidental logging of sensitive values.
//! Credentials are request-scoped: each extraction submission carries its own
//! key, and nothing here is cached between submissions.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

/// Default Gemini model when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "models/gemini-2.0-pro-exp-02-05";

/// Models offered in the UI, default first.
pub const SUPPORTED_MODELS: [&str; 2] = [DEFAULT_MODEL, "models/gemini-1.5-pro"];

/// Default sampling temperature for extraction calls.
///
/// Kept low so the model stays close to the JSON shape the prompt demands.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// A secret string that won't be logged or displayed.
///
/// Uses `secrecy::SecretBox` to ensure API keys are never accidentally
/// exposed in logs, debug output, or error messages.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    /// Create a new secret string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the secret value for use.
    ///
    /// Only call this when actually using the secret (e.g., in an API request).
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Everything needed to call Gemini on behalf of one user.
#[derive(Clone)]
pub struct GeminiCredentials {
    /// API key (secret)
    pub api_key: SecretString,

    /// Model identifier, e.g., "models/gemini-2.0-pro-exp-02-05"
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,
}

impl GeminiCredentials {
    /// Create credentials with the default model and temperature.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

impl fmt::Debug for GeminiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiCredentials")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_not_in_debug() {
        let secret = SecretString::new("AIza-super-secret-key");
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("AIza-super"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_secret_not_in_display() {
        let secret = SecretString::new("AIza-super-secret-key");
        let display = format!("{}", secret);
        assert!(!display.contains("AIza-super"));
        assert!(display.contains("[REDACTED]"));
    }

    #[test]
    fn test_expose_works() {
        let secret = SecretString::new("AIza-super-secret-key");
        assert_eq!(secret.expose(), "AIza-super-secret-key");
    }

    #[test]
    fn test_credentials_debug_hides_key() {
        let creds = GeminiCredentials::new("AIza-secret").with_model("models/gemini-1.5-pro");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("AIza-secret"));
        assert!(debug.contains("models/gemini-1.5-pro"));
    }

    #[test]
    fn test_defaults() {
        let creds = GeminiCredentials::new("AIza-secret");
        assert_eq!(creds.model, DEFAULT_MODEL);
        assert_eq!(creds.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(SUPPORTED_MODELS[0], DEFAULT_MODEL);
    }
}
