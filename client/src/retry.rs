//! Explicit retry policy for outbound calls.

use reqwest::StatusCode;
use std::time::Duration;

/// Backoff schedule for transient failures: exponential growth from
/// `base_delay` capped at `max_delay`, with bounded jitter, all inside a
/// `max_elapsed` budget measured from the first attempt.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub enabled: bool,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub max_elapsed: Duration,
}

impl RetryPolicy {
    /// Default schedule bounded by the given total elapsed time.
    pub fn bounded_by(max_elapsed: Duration) -> Self {
        RetryPolicy {
            enabled: true,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(10),
            max_elapsed,
        }
    }

    pub fn disabled() -> Self {
        RetryPolicy {
            enabled: false,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            max_elapsed: Duration::ZERO,
        }
    }

    /// Delay before the retry after `attempt` failures. Jitter keeps the
    /// result in `[exp/2, exp]` where `exp` is the capped exponential step.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exp = 1u64 << attempt.min(8);
        let base_ms = self.base_delay.as_millis().min(u64::MAX as u128) as u64;
        let max_ms = self.max_delay.as_millis().min(u64::MAX as u128) as u64;
        let without_jitter = base_ms.saturating_mul(exp).min(max_ms);
        let half = without_jitter / 2;
        let jitter = (half as f64 * rand::random::<f64>()) as u64;
        Duration::from_millis(half + jitter)
    }
}

/// Statuses worth retrying: rate limiting and server-side failures.
pub fn retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_grows_and_caps() {
        let policy = RetryPolicy::bounded_by(Duration::from_secs(30));
        for attempt in 0..12 {
            let delay = policy.delay_for_attempt(attempt);
            let exp = 1u64 << attempt.min(8);
            let cap = policy
                .max_delay
                .min(policy.base_delay * exp as u32)
                .as_millis() as u64;
            assert!(delay.as_millis() as u64 <= cap);
            assert!(delay.as_millis() as u64 >= cap / 2);
        }
    }

    #[test]
    fn retryable_statuses() {
        assert!(retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(retryable_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!retryable_status(StatusCode::NOT_FOUND));
        assert!(!retryable_status(StatusCode::BAD_REQUEST));
        assert!(!retryable_status(StatusCode::OK));
    }
}
