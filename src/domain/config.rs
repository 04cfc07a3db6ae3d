//! Completion endpoint configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Top-level configuration loaded from `bookcraft.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Completion endpoint configuration.
    #[serde(default)]
    pub completion: CompletionApiConfig,
}

impl FileConfig {
    /// Load configuration from the given path, or defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content)?;
        config.completion.validate()?;
        Ok(config)
    }
}

/// Configuration for the OpenAI-compatible completion endpoint.
///
/// Defaults target a local server (LM Studio style) on the conventional
/// loopback port.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionApiConfig {
    /// Base URL of the completion server, up to and including the API
    /// version segment (e.g. `http://127.0.0.1:1234/v1`).
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Model identifier sent with each request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature. Moderate by default: consistent tone without
    /// greedy repetition.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds. Local generation is slow.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Pause after a failed call before the error is surfaced, in
    /// milliseconds. Damps rapid re-submission against an overloaded local
    /// server.
    #[serde(default = "default_failure_pause_ms")]
    pub failure_pause_ms: u64,
}

impl Default for CompletionApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
            failure_pause_ms: default_failure_pause_ms(),
        }
    }
}

impl CompletionApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("model must not be empty"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::config_error("temperature must be between 0.0 and 2.0"));
        }
        Ok(())
    }
}

fn default_base_url() -> Url {
    Url::parse("http://127.0.0.1:1234/v1").expect("Default base URL must be valid")
}

fn default_model() -> String {
    "local-model".to_string()
}

fn default_temperature() -> f32 {
    0.65
}

fn default_timeout() -> u64 {
    300
}

fn default_failure_pause_ms() -> u64 {
    2000
}
