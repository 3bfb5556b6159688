//! Analyzer settings.

use std::time::Duration;

use crate::prompt::SYSTEM_PROMPT;
use crate::retry::RetryPolicy;

pub const API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const API_VERSION: &str = "2023-06-01";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 600;
pub const ANALYSIS_TIMEOUT: Duration = Duration::from_secs(30);
pub const VALIDATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Immutable configuration for [`AnthropicAnalyzer`](crate::AnthropicAnalyzer).
#[derive(Debug, Clone)]
pub struct AnalyzerSettings {
    pub api_url: String,
    pub api_version: String,
    pub model: String,
    pub max_tokens: u32,
    pub system_prompt: String,
    pub analysis_timeout: Duration,
    pub validation_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            api_version: API_VERSION.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: SYSTEM_PROMPT.to_string(),
            analysis_timeout: ANALYSIS_TIMEOUT,
            validation_timeout: VALIDATION_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

impl AnalyzerSettings {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Blank prompts keep the built-in one.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        if !prompt.trim().is_empty() {
            self.system_prompt = prompt;
        }
        self
    }

    pub fn with_timeouts(mut self, analysis: Duration, validation: Duration) -> Self {
        self.analysis_timeout = analysis;
        self.validation_timeout = validation;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AnalyzerSettings::default();
        assert_eq!(settings.api_url, "https://api.anthropic.com/v1/messages");
        assert_eq!(settings.api_version, "2023-06-01");
        assert_eq!(settings.model, "claude-sonnet-4-20250514");
        assert_eq!(settings.max_tokens, 600);
        assert_eq!(settings.analysis_timeout, Duration::from_secs(30));
        assert_eq!(settings.validation_timeout, Duration::from_secs(10));
        assert_eq!(settings.retry, RetryPolicy::default());
        assert_eq!(settings.system_prompt, SYSTEM_PROMPT);
    }

    #[test]
    fn test_builders() {
        let settings = AnalyzerSettings::default()
            .with_api_url("http://localhost:1234/v1/messages")
            .with_model("claude-haiku-4-20250514")
            .with_system_prompt("Be terse.")
            .with_timeouts(Duration::from_secs(5), Duration::from_secs(2))
            .with_retry(RetryPolicy::no_retry());

        assert_eq!(settings.api_url, "http://localhost:1234/v1/messages");
        assert_eq!(settings.model, "claude-haiku-4-20250514");
        assert_eq!(settings.system_prompt, "Be terse.");
        assert_eq!(settings.analysis_timeout, Duration::from_secs(5));
        assert_eq!(settings.validation_timeout, Duration::from_secs(2));
        assert_eq!(settings.retry.max_attempts(), 1);
    }

    #[test]
    fn test_blank_system_prompt_keeps_default() {
        let settings = AnalyzerSettings::default().with_system_prompt("   ");
        assert_eq!(settings.system_prompt, SYSTEM_PROMPT);
    }
}
