//! Configuration validation.

use clutch_protocols::looks_like_credential;

use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_anthropic(config, &mut result);
        Self::validate_analysis(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_anthropic(config: &Config, result: &mut ValidationResult) {
        let anthropic = &config.anthropic;

        match url::Url::parse(&anthropic.api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => result.add_error(ValidationError::new(
                "anthropic.api_url",
                "api_url must be an absolute http:// or https:// URL",
            )),
        }

        if anthropic.model.is_empty() {
            result.add_error(ValidationError::new("anthropic.model", "model cannot be empty"));
        }

        if anthropic.api_version.is_empty() {
            result.add_error(ValidationError::new(
                "anthropic.api_version",
                "api_version cannot be empty",
            ));
        }

        if anthropic.max_tokens == 0 {
            result.add_error(ValidationError::new(
                "anthropic.max_tokens",
                "max_tokens must be greater than 0",
            ));
        }

        if let Some(ref key) = anthropic.api_key {
            if !looks_like_credential(key) {
                result.add_warning(ValidationWarning::new(
                    "anthropic.api_key",
                    "API key does not start with sk-ant-",
                ));
            }
            result.add_warning(ValidationWarning::new(
                "anthropic.api_key",
                "API key is stored in plain text, consider ${ANTHROPIC_API_KEY}",
            ));
        }
    }

    fn validate_analysis(config: &Config, result: &mut ValidationResult) {
        let analysis = &config.analysis;

        if analysis.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "analysis.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }

        if analysis.validation_timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "analysis.validation_timeout_seconds",
                "validation_timeout_seconds must be greater than 0",
            ));
        }

        if !(1..=2).contains(&analysis.max_attempts) {
            result.add_error(ValidationError::new(
                "analysis.max_attempts",
                "max_attempts must be 1 or 2",
            ));
        }

        if analysis.max_text_chars == 0 {
            result.add_error(ValidationError::new(
                "analysis.max_text_chars",
                "max_text_chars must be greater than 0",
            ));
        }

        if analysis.timeout_seconds > 120 {
            result.add_warning(ValidationWarning::new(
                "analysis.timeout_seconds",
                "timeout_seconds is very high (>120), a stuck call will block that long",
            ));
        }

        if matches!(analysis.system_prompt.as_deref(), Some(p) if p.trim().is_empty()) {
            result.add_warning(ValidationWarning::new(
                "analysis.system_prompt",
                "system_prompt is blank, the built-in prompt will be used",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&config.logging.level.as_str()) {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    config.logging.level, valid_levels
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
