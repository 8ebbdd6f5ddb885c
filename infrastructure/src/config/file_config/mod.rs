//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod course;
mod output;
mod provider;
mod retry;

pub use course::FileCourseConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use retry::FileRetryConfig;

use coursegen_application::PipelineConfig;
use coursegen_domain::{ConfigIssue, ConfigIssueCode, MAX_DURATION_WEEKS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors turning file configuration into runtime components
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("no API key configured (set provider.api_key or ${env})")]
    MissingApiKey { env: String },

    #[error("model name cannot be empty")]
    EmptyModelName,
}

/// Accepted range for `provider.temperature`.
const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model provider settings
    pub provider: FileProviderConfig,
    /// Transport retry settings
    pub retry: FileRetryConfig,
    /// Course composition defaults
    pub course: FileCourseConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.retry.max_retries == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroRetries,
                "retry.max_retries is 0; the provider will still be called once",
            ));
        }
        if self.retry.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "retry.timeout_secs cannot be 0",
            ));
        }
        if !TEMPERATURE_RANGE.contains(&self.provider.temperature) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::TemperatureOutOfRange,
                format!(
                    "provider.temperature must be between {} and {}, got {}",
                    TEMPERATURE_RANGE.start(),
                    TEMPERATURE_RANGE.end(),
                    self.provider.temperature
                ),
            ));
        }
        if self.course.questions_per_topic == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroQuestionsPerTopic,
                "course.questions_per_topic must be at least 1",
            ));
        }
        if !(1..=MAX_DURATION_WEEKS).contains(&self.course.default_weeks) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::DefaultWeeksOutOfRange,
                format!(
                    "course.default_weeks must be between 1 and {}, got {}",
                    MAX_DURATION_WEEKS, self.course.default_weeks
                ),
            ));
        }
        if self.course.max_concurrent_quizzes == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroConcurrentQuizzes,
                "course.max_concurrent_quizzes must be at least 1",
            ));
        }

        issues
    }

    pub fn to_pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_retry(self.retry.to_retry_policy())
            .with_questions_per_topic(self.course.questions_per_topic)
            .with_max_concurrent_quizzes(self.course.max_concurrent_quizzes)
    }

    /// Copy safe to print: a configured API key is masked.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.provider.api_key.is_some() {
            config.provider.api_key = Some("<redacted>".to_string());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegen_domain::{Difficulty, OutputFormat, Severity};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
model = "gemini-2.0-flash"
api_key_env = "MY_GEMINI_KEY"
temperature = 0.2

[retry]
max_retries = 3
retry_delay_secs = 1
timeout_secs = 15

[course]
questions_per_topic = 4
default_difficulty = "intermediate"
default_weeks = 6
max_concurrent_quizzes = 3

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.model, "gemini-2.0-flash");
        assert_eq!(config.provider.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.course.default_difficulty, Difficulty::Intermediate);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());

        let pipeline = config.to_pipeline_config();
        assert_eq!(pipeline.questions_per_topic, 4);
        assert_eq!(pipeline.max_concurrent_quizzes, 3);
        assert_eq!(pipeline.retry.max_retries, 3);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[provider]
model = "gemini-1.5-pro"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.model, "gemini-1.5-pro");
        // Defaults should apply
        assert_eq!(config.provider.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.retry, FileRetryConfig::default());
        assert!(config.output.show_progress);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.retry.max_retries = 0;
        config.retry.timeout_secs = 0;
        config.provider.temperature = 3.5;
        config.course.questions_per_topic = 0;
        config.course.default_weeks = 13;
        config.course.max_concurrent_quizzes = 0;

        let issues = config.validate();
        let codes: Vec<_> = issues.iter().map(|i| i.code).collect();
        assert_eq!(
            codes,
            vec![
                ConfigIssueCode::ZeroRetries,
                ConfigIssueCode::ZeroTimeout,
                ConfigIssueCode::TemperatureOutOfRange,
                ConfigIssueCode::ZeroQuestionsPerTopic,
                ConfigIssueCode::DefaultWeeksOutOfRange,
                ConfigIssueCode::ZeroConcurrentQuizzes,
            ]
        );
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn test_redacted_hides_key() {
        let mut config = FileConfig::default();
        config.provider.api_key = Some("secret".to_string());
        let printed = toml::to_string(&config.redacted()).unwrap();
        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));
    }
}
