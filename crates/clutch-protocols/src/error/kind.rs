//! Failure taxonomy.

use serde::{Deserialize, Serialize};

/// Why an analysis or credential check failed.
///
/// Exactly one kind is resolved per failed call. The kind drives both the
/// retry policy and the text shown to the end user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// HTTP 401.
    InvalidCredential,
    /// HTTP 429. The only retryable kind.
    RateLimited,
    /// HTTP 400.
    BadRequest,
    /// HTTP 5xx.
    ServerUnavailable,
    /// Any other non-2xx status.
    UnknownApiError,
    /// Transport failure before a status was obtained.
    NetworkError,
    /// The analysis call did not complete within its timeout.
    Timeout,
    /// The model reply could not be turned into a result object.
    DecodeFailure,
    /// The credential check did not complete within its timeout.
    ValidationTimeout,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 9] = [
        ErrorKind::InvalidCredential,
        ErrorKind::RateLimited,
        ErrorKind::BadRequest,
        ErrorKind::ServerUnavailable,
        ErrorKind::UnknownApiError,
        ErrorKind::NetworkError,
        ErrorKind::Timeout,
        ErrorKind::DecodeFailure,
        ErrorKind::ValidationTimeout,
    ];

    /// Whether an automatic retry is permitted after this kind.
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::RateLimited)
    }

    /// Short machine-friendly label.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidCredential => "invalid_credential",
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::ServerUnavailable => "server_unavailable",
            ErrorKind::UnknownApiError => "unknown_api_error",
            ErrorKind::NetworkError => "network_error",
            ErrorKind::Timeout => "timeout",
            ErrorKind::DecodeFailure => "decode_failure",
            ErrorKind::ValidationTimeout => "validation_timeout",
        }
    }

    /// Text suitable for showing to an end user.
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorKind::InvalidCredential => "Invalid API key. Please check and try again.",
            ErrorKind::RateLimited => "Rate limited. Wait a moment and try again.",
            ErrorKind::BadRequest => "The request was rejected by the API.",
            ErrorKind::ServerUnavailable => "The API is temporarily unavailable. Try again shortly.",
            ErrorKind::UnknownApiError => "The API returned an unexpected error.",
            ErrorKind::NetworkError => "Could not reach the API. Check your connection.",
            ErrorKind::Timeout => "The analysis took too long and was cancelled.",
            ErrorKind::DecodeFailure => "Failed to parse AI response.",
            ErrorKind::ValidationTimeout => "Checking the API key timed out.",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
