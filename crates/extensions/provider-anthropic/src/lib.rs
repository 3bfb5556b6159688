//! Anthropic-backed content analyzer for Clutch.
//!
//! [`AnthropicAnalyzer`] turns an [`AnalysisRequest`](clutch_protocols::AnalysisRequest)
//! into one Messages API exchange (plus at most one rate-limit retry) and
//! decodes the model's reply with the tolerant [`decoder`].

mod analyzer;
mod api;
mod classify;
pub mod decoder;
mod prompt;
mod retry;
mod settings;

pub use analyzer::AnthropicAnalyzer;
pub use classify::classify_status;
pub use prompt::{build_user_prompt, SYSTEM_PROMPT};
pub use retry::{with_rate_limit_retry, RetryPolicy};
pub use settings::AnalyzerSettings;
