//! Application configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "promptopt.toml";

/// Configuration loaded from `promptopt.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Gemini API configuration.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// Base URL of the Generative Language API.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier used for every call.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.model.contains('/') || self.model.contains(char::is_whitespace) {
            return Err(AppError::InvalidConfig(format!(
                "model '{}' must not contain '/' or whitespace",
                self.model
            )));
        }
        Ok(())
    }

    /// Endpoint for `models/{model}:generateContent` under the configured base URL.
    pub fn generate_content_url(&self) -> Result<Url, AppError> {
        let base = self.api_url.as_str().trim_end_matches('/');
        let raw = format!("{}/models/{}:generateContent", base, self.model);
        Url::parse(&raw)
            .map_err(|e| AppError::InvalidConfig(format!("Invalid API URL '{}': {}", raw, e)))
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.timeout_secs, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_gemini_config_invalid_timeout() {
        let config = GeminiApiConfig { timeout_secs: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_gemini_config_empty_model() {
        let config = GeminiApiConfig { model: "  ".to_string(), ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(msg) if msg.contains("model")));
    }

    #[test]
    fn validate_gemini_config_rejects_path_in_model() {
        let config = GeminiApiConfig { model: "models/gemini".to_string(), ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn generate_content_url_uses_model() {
        let config = GeminiApiConfig::default();
        assert_eq!(
            config.generate_content_url().unwrap().as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn generate_content_url_tolerates_trailing_slash() {
        let config = GeminiApiConfig {
            api_url: Url::parse("http://127.0.0.1:1234/").unwrap(),
            ..Default::default()
        };
        assert_eq!(
            config.generate_content_url().unwrap().as_str(),
            "http://127.0.0.1:1234/models/gemini-2.5-flash:generateContent"
        );
    }
}
