//! Structured configuration issues.
//!
//! Configuration loaders report problems as a list of [`ConfigIssue`]s rather
//! than failing on the first one, so the CLI can print every warning and only
//! abort when at least one issue has [`Severity::Error`].

use std::fmt;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `retry.max_retries = 0`: treated as a single attempt with no retries.
    ZeroRetries,
    /// `retry.timeout_secs = 0`: every attempt would time out immediately.
    ZeroTimeout,
    /// `provider.temperature` outside `0.0..=2.0`.
    TemperatureOutOfRange,
    /// `course.questions_per_topic = 0`: course quizzes would be empty.
    ZeroQuestionsPerTopic,
    /// `course.default_weeks` outside `1..=12`.
    DefaultWeeksOutOfRange,
    /// `course.max_concurrent_quizzes = 0`: course quizzes could never start.
    ZeroConcurrentQuizzes,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns true if any issue in the list is fatal.
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(ConfigIssue::is_error)
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}
