//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These describe invalid input handed to the pipeline by a caller. Upstream
/// AI failures never surface as a `DomainError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Subject name cannot be empty")]
    EmptySubject,

    #[error("Subject name is too long ({0} characters, max {max})", max = crate::course::MAX_SUBJECT_CHARS)]
    SubjectTooLong(usize),

    #[error("Topic title cannot be empty")]
    EmptyTopic,

    #[error("Duration must be between 1 and {max} weeks, got {0}", max = crate::course::MAX_DURATION_WEEKS)]
    InvalidDuration(u32),

    #[error("Question count must be at least 1")]
    InvalidQuestionCount,

    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),
}
