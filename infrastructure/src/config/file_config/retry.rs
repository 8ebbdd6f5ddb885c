//! Retry configuration from TOML (`[retry]` section)

use coursegen_application::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw retry configuration; durations are whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Total attempts per generation call (default: 5)
    pub max_retries: u32,
    /// Backoff unit; attempt `n` waits `n × retry_delay_secs` (default: 3)
    pub retry_delay_secs: u64,
    /// Per-attempt timeout (default: 30)
    pub timeout_secs: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_retries: policy.max_retries,
            retry_delay_secs: policy.retry_delay.as_secs(),
            timeout_secs: policy.timeout.as_secs(),
        }
    }
}

impl FileRetryConfig {
    pub fn to_retry_policy(&self) -> RetryPolicy {
        RetryPolicy::default()
            .with_max_retries(self.max_retries)
            .with_retry_delay(Duration::from_secs(self.retry_delay_secs))
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}
