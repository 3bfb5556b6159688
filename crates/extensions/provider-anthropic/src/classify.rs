//! HTTP status and transport failure classification.

use clutch_protocols::{ClassifiedError, ErrorKind};

use crate::api::ApiErrorBody;

/// Map a non-2xx status and its body to exactly one [`ErrorKind`].
///
/// The message carries the status and the API's own error text when the
/// body is the JSON error envelope, otherwise the raw body.
pub fn classify_status(status: u16, body: &str) -> ClassifiedError {
    let kind = match status {
        401 => ErrorKind::InvalidCredential,
        429 => ErrorKind::RateLimited,
        400 => ErrorKind::BadRequest,
        500..=599 => ErrorKind::ServerUnavailable,
        _ => ErrorKind::UnknownApiError,
    };

    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(envelope) => format!(
            "API error {} ({}): {}",
            status, envelope.error.error_type, envelope.error.message
        ),
        Err(_) => format!("API error {}: {}", status, body.trim()),
    };

    ClassifiedError::new(kind, message)
}

/// Failure before any status was obtained.
pub fn classify_transport(error: &reqwest::Error) -> ClassifiedError {
    ClassifiedError::network(format!("request failed: {}", error))
}
