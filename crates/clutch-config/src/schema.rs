//! Configuration schema definitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Render as TOML with the API key masked.
    pub fn to_redacted_toml(&self) -> Result<String, ConfigError> {
        let mut copy = self.clone();
        if let Some(key) = copy.anthropic.api_key.as_deref() {
            copy.anthropic.api_key = Some(clutch_protocols::redact_credential(key));
        }
        Ok(toml::to_string_pretty(&copy)?)
    }
}

/// Inference API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            api_version: default_api_version(),
            model: default_model(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.anthropic.com/v1/messages".to_string()
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    600
}

/// Analysis call behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_validation_timeout")]
    pub validation_timeout_seconds: u64,

    #[serde(default = "default_retry_delay")]
    pub rate_limit_retry_delay_ms: u64,

    /// Attempts per analysis, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Page text longer than this is truncated before sending.
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,

    /// Replaces the built-in system prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            validation_timeout_seconds: default_validation_timeout(),
            rate_limit_retry_delay_ms: default_retry_delay(),
            max_attempts: default_max_attempts(),
            max_text_chars: default_max_text_chars(),
            system_prompt: None,
        }
    }
}

impl AnalysisConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn validation_timeout(&self) -> Duration {
        Duration::from_secs(self.validation_timeout_seconds)
    }

    pub fn rate_limit_retry_delay(&self) -> Duration {
        Duration::from_millis(self.rate_limit_retry_delay_ms)
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_validation_timeout() -> u64 {
    10
}

fn default_retry_delay() -> u64 {
    4000
}

fn default_max_attempts() -> u32 {
    2
}

fn default_max_text_chars() -> usize {
    3000
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_directory")]
    pub directory: String,

    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            level: default_log_level(),
        }
    }
}

fn default_log_directory() -> String {
    "~/.clutch/logs".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
