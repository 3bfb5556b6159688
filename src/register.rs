//! Analyzer construction from configuration.

use std::sync::Arc;

use tracing::debug;

use clutch_config::Config;
use clutch_protocols::{ClassifiedError, ContentAnalyzer, looks_like_credential, redact_credential};
use clutch_provider_anthropic::{AnalyzerSettings, AnthropicAnalyzer, RetryPolicy};

/// Map configuration onto analyzer settings.
pub(crate) fn settings_from_config(config: &Config) -> AnalyzerSettings {
    let mut settings = AnalyzerSettings::default()
        .with_api_url(&config.anthropic.api_url)
        .with_model(&config.anthropic.model)
        .with_timeouts(config.analysis.timeout(), config.analysis.validation_timeout())
        .with_retry(RetryPolicy::new(
            config.analysis.max_attempts,
            config.analysis.rate_limit_retry_delay(),
        ));
    settings.api_version = config.anthropic.api_version.clone();
    settings.max_tokens = config.anthropic.max_tokens;
    if let Some(ref prompt) = config.analysis.system_prompt {
        settings = settings.with_system_prompt(prompt);
    }
    settings
}

/// Build the analyzer used by every command.
pub(crate) fn build_analyzer(config: &Config) -> Arc<dyn ContentAnalyzer> {
    let settings = settings_from_config(config);
    debug!(api_url = %settings.api_url, model = %settings.model, "Building analyzer");
    Arc::new(AnthropicAnalyzer::new(settings))
}

/// Pick the credential: CLI flag / environment first, then the config file.
///
/// A missing or malformed key is an `InvalidCredential` error.
pub(crate) fn resolve_credential(
    cli_key: Option<&str>,
    config: &Config,
) -> Result<String, ClassifiedError> {
    let key = cli_key
        .or(config.anthropic.api_key.as_deref())
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            ClassifiedError::invalid_credential(
                "no API key: pass --api-key, set ANTHROPIC_API_KEY, or set anthropic.api_key",
            )
        })?;

    if !looks_like_credential(key) {
        return Err(ClassifiedError::invalid_credential(format!(
            "{} does not look like an Anthropic API key (expected sk-ant-...)",
            redact_credential(key)
        )));
    }

    Ok(key.to_string())
}
