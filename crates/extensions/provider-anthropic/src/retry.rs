//! Bounded retry after rate limiting.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::warn;

use clutch_protocols::ClassifiedError;

/// Most attempts allowed per call, including the first.
pub const MAX_ATTEMPTS: u32 = 2;

/// Fixed pause before retrying a rate-limited attempt.
pub const RATE_LIMIT_DELAY: Duration = Duration::from_secs(4);

/// Retry configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    rate_limit_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            rate_limit_delay: RATE_LIMIT_DELAY,
        }
    }
}

impl RetryPolicy {
    /// `max_attempts` is clamped to `1..=2`.
    pub fn new(max_attempts: u32, rate_limit_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.clamp(1, MAX_ATTEMPTS),
            rate_limit_delay,
        }
    }

    /// Policy that never retries.
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn rate_limit_delay(&self) -> Duration {
        self.rate_limit_delay
    }
}

/// Run `operation`, retrying only after a retryable error.
///
/// Errors are returned unchanged; the final error is whatever the last
/// attempt produced.
pub async fn with_rate_limit_retry<F, Fut, T>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, ClassifiedError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ClassifiedError>>,
{
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < policy.max_attempts => {
                warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    delay_ms = policy.rate_limit_delay.as_millis() as u64,
                    error = %e,
                    "Rate limited, retrying"
                );
                sleep(policy.rate_limit_delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
