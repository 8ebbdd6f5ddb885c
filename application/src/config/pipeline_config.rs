//! Pipeline parameters — retry policy and course composition.
//!
//! These are application-layer concerns, not domain policy. The
//! infrastructure config loader builds them from TOML/env values.

use coursegen_domain::DEFAULT_QUESTION_COUNT;
use std::time::Duration;

/// Retry behavior of the transport.
///
/// Attempt `n` (1-indexed) that fails is followed by a sleep of
/// `retry_delay × n` before attempt `n + 1`. There is no sleep after the last
/// attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one.
    pub max_retries: u32,
    /// Base backoff unit.
    pub retry_delay: Duration,
    /// Upper bound for a single attempt.
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            retry_delay: Duration::from_secs(3),
            timeout: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    // ==================== Builder Methods ====================

    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    // ==================== Derived Values ====================

    /// Number of attempts actually made; a zero setting still calls once.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.max(1)
    }

    /// Sleep after failed attempt `attempt` (1-indexed).
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.retry_delay.saturating_mul(attempt)
    }

    /// Upper bound on the time one transport call can take.
    pub fn worst_case_latency(&self) -> Duration {
        let attempts = self.max_attempts();
        let backoff: Duration = (1..attempts).map(|a| self.backoff(a)).sum();
        self.timeout.saturating_mul(attempts) + backoff
    }
}

/// Configuration for [`AiService`](crate::AiService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub retry: RetryPolicy,
    /// Questions requested per topic by `generate_course`.
    pub questions_per_topic: usize,
    /// Upper bound on quiz generations in flight during `generate_course`.
    pub max_concurrent_quizzes: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            questions_per_topic: DEFAULT_QUESTION_COUNT,
            max_concurrent_quizzes: Self::DEFAULT_MAX_CONCURRENT_QUIZZES,
        }
    }
}

impl PipelineConfig {
    pub const DEFAULT_MAX_CONCURRENT_QUIZZES: usize = 2;

    /// Effective quiz concurrency; zero is treated as one.
    pub fn quiz_concurrency(&self) -> usize {
        self.max_concurrent_quizzes.max(1)
    }

    pub fn with_max_concurrent_quizzes(mut self, limit: usize) -> Self {
        self.max_concurrent_quizzes = limit;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_questions_per_topic(mut self, count: usize) -> Self {
        self.questions_per_topic = count;
        self
    }
}
