//! Generation request value objects

use super::{DEFAULT_DURATION_WEEKS, DEFAULT_QUESTION_COUNT, MAX_DURATION_WEEKS, MAX_SUBJECT_CHARS};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target difficulty of a generated course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn all() -> [Difficulty; 3] {
        [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(DomainError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// What kind of content a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    Roadmap,
    Quiz,
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationKind::Roadmap => write!(f, "roadmap"),
            GenerationKind::Quiz => write!(f, "quiz"),
        }
    }
}

/// Validated input for a single generation call (Value Object)
///
/// Construct with [`GenerationRequest::roadmap`] or [`GenerationRequest::quiz`];
/// both reject input the pipeline cannot meaningfully serve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    subject_name: String,
    difficulty: Difficulty,
    duration_weeks: u32,
    kind: GenerationKind,
    topic_title: Option<String>,
    question_count: Option<usize>,
}

impl GenerationRequest {
    /// Request a course roadmap.
    pub fn roadmap(
        subject_name: impl Into<String>,
        difficulty: Difficulty,
        duration_weeks: u32,
    ) -> Result<Self, DomainError> {
        let subject_name = validate_subject(subject_name.into())?;
        if !(1..=MAX_DURATION_WEEKS).contains(&duration_weeks) {
            return Err(DomainError::InvalidDuration(duration_weeks));
        }

        Ok(Self {
            subject_name,
            difficulty,
            duration_weeks,
            kind: GenerationKind::Roadmap,
            topic_title: None,
            question_count: None,
        })
    }

    /// Request a quiz about one topic of a subject.
    pub fn quiz(
        topic_title: impl Into<String>,
        subject_name: impl Into<String>,
        question_count: usize,
    ) -> Result<Self, DomainError> {
        let subject_name = validate_subject(subject_name.into())?;
        let topic_title = topic_title.into().trim().to_string();
        if topic_title.is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        if question_count == 0 {
            return Err(DomainError::InvalidQuestionCount);
        }

        Ok(Self {
            subject_name,
            difficulty: Difficulty::default(),
            duration_weeks: DEFAULT_DURATION_WEEKS,
            kind: GenerationKind::Quiz,
            topic_title: Some(topic_title),
            question_count: Some(question_count),
        })
    }

    pub fn subject_name(&self) -> &str {
        &self.subject_name
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn duration_weeks(&self) -> u32 {
        self.duration_weeks
    }

    pub fn kind(&self) -> GenerationKind {
        self.kind
    }

    /// Topic title for quiz requests; falls back to the subject otherwise.
    pub fn topic_title(&self) -> &str {
        self.topic_title.as_deref().unwrap_or(&self.subject_name)
    }

    pub fn question_count(&self) -> usize {
        self.question_count.unwrap_or(DEFAULT_QUESTION_COUNT)
    }
}

fn validate_subject(subject_name: String) -> Result<String, DomainError> {
    let trimmed = subject_name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptySubject);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_SUBJECT_CHARS {
        return Err(DomainError::SubjectTooLong(chars));
    }
    Ok(trimmed.to_string())
}
