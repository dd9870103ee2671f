//! Sampler configuration.

use crate::analysis::DEFAULT_TIMESTAMP_THRESHOLD;
use std::time::Duration;

/// Settings for one sampling run.
///
/// Reads from environment variables with sensible defaults:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `COOKIEGET_COUNT` | `10` | Number of requests to send |
/// | `COOKIEGET_CONCURRENCY` | `1` | Requests in flight at once |
/// | `COOKIEGET_TIMEOUT_SECS` | `30` | Per-request timeout |
/// | `COOKIEGET_TIMESTAMP_THRESHOLD` | `7` | Digits a timestamp match must exceed |
/// | `COOKIEGET_USER_AGENT` | `cookieget/<version>` | User-Agent header |
///
/// # Example
///
/// ```rust
/// use cookieget::SamplerConfig;
///
/// let config = SamplerConfig::from_env().with_count(25);
/// assert_eq!(config.count, 25);
/// ```
#[derive(Clone, Debug)]
pub struct SamplerConfig {
    /// Number of requests to send (default: 10)
    pub count: usize,
    /// Requests in flight at once (default: 1)
    pub concurrency: usize,
    /// Per-request timeout (default: 30s)
    pub timeout: Duration,
    /// A timestamp match is reported only if longer than this (default: 7)
    pub timestamp_threshold: usize,
    /// User-Agent sent with every request
    pub user_agent: String,
}

impl SamplerConfig {
    /// Create a new config from environment variables.
    pub fn from_env() -> Self {
        Self {
            count: env_parse("COOKIEGET_COUNT").unwrap_or(10).max(1),
            concurrency: env_parse("COOKIEGET_CONCURRENCY").unwrap_or(1).max(1),
            timeout: Duration::from_secs(env_parse("COOKIEGET_TIMEOUT_SECS").unwrap_or(30)),
            timestamp_threshold: env_parse("COOKIEGET_TIMESTAMP_THRESHOLD")
                .unwrap_or(DEFAULT_TIMESTAMP_THRESHOLD),
            user_agent: std::env::var("COOKIEGET_USER_AGENT")
                .unwrap_or_else(|_| default_user_agent()),
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count.max(1);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timestamp_threshold(mut self, threshold: usize) -> Self {
        self.timestamp_threshold = threshold;
        self
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            count: 10,
            concurrency: 1,
            timeout: Duration::from_secs(30),
            timestamp_threshold: DEFAULT_TIMESTAMP_THRESHOLD,
            user_agent: default_user_agent(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn default_user_agent() -> String {
    format!("cookieget/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SamplerConfig::default();
        assert_eq!(config.count, 10);
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.timestamp_threshold, 7);
        assert!(config.user_agent.starts_with("cookieget/"));
    }

    #[test]
    fn test_from_env() {
        // Only this test touches these variables.
        std::env::set_var("COOKIEGET_COUNT", "42");
        std::env::set_var("COOKIEGET_CONCURRENCY", "0");
        std::env::set_var("COOKIEGET_TIMEOUT_SECS", "not-a-number");
        std::env::set_var("COOKIEGET_TIMESTAMP_THRESHOLD", "5");
        std::env::set_var("COOKIEGET_USER_AGENT", "probe/1.0");

        let config = SamplerConfig::from_env();
        assert_eq!(config.count, 42);
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.timestamp_threshold, 5);
        assert_eq!(config.user_agent, "probe/1.0");

        for key in [
            "COOKIEGET_COUNT",
            "COOKIEGET_CONCURRENCY",
            "COOKIEGET_TIMEOUT_SECS",
            "COOKIEGET_TIMESTAMP_THRESHOLD",
            "COOKIEGET_USER_AGENT",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_builders_clamp_to_one() {
        let config = SamplerConfig::default()
            .with_count(0)
            .with_concurrency(0)
            .with_timeout(Duration::from_secs(2))
            .with_timestamp_threshold(3);
        assert_eq!(config.count, 1);
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.timestamp_threshold, 3);
    }
}
