//! Client configuration.

use std::time::Duration;

/// Knobs for the SDK client: where the API lives, the per-call timeout, and
/// the progressive-backoff budget that keeps the SDK from hammering the API
/// when calls fail transiently.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for every API call.
    pub base_url: String,
    /// Timeout applied to each HTTP call.
    pub timeout: Duration,
    /// Whether transient failures are retried at all.
    pub backoff: bool,
    /// Maximum total time the client keeps retrying one call before the
    /// last error is surfaced.
    pub backoff_max_time: Duration,
}

impl ClientConfig {
    pub const DEFAULT_URL: &'static str = "https://api.gridironcentral.com";

    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..ClientConfig::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: Self::DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(5),
            backoff: true,
            backoff_max_time: Duration::from_secs(30),
        }
    }
}
