//! Classified analysis errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ErrorKind;

/// A failure with exactly one [`ErrorKind`] and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ClassifiedError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_credential(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCredential, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RateLimited, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NetworkError, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DecodeFailure, message)
    }

    pub fn validation_timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationTimeout, message)
    }

    /// Whether the orchestrator may retry after this error.
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    /// End-user text for this error's kind.
    pub fn user_message(&self) -> &'static str {
        self.kind.user_message()
    }
}

#[cfg(test)]
#[path = "classified_tests.rs"]
mod tests;
