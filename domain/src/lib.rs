//! Domain layer for coursegen
//!
//! This crate contains the course entities and the pure stages of the
//! generation pipeline. It performs no I/O and has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Pipeline stages
//!
//! - [`PromptTemplate`] builds deterministic instructions for the model
//! - [`clean_response`] strips fences and prose around a JSON payload
//! - [`parse_resilient`] recovers a JSON value in three tiers
//! - [`is_valid_roadmap`] / [`is_valid_quiz`] check the recovered structure
//! - [`FallbackGenerator`] supplies placeholder content when any stage fails
//!
//! The orchestration that strings these together lives in the application
//! layer.

pub mod config;
pub mod core;
pub mod course;
pub mod fallback;
pub mod normalize;
pub mod prompt;
pub mod util;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use course::{
    DEFAULT_DURATION_WEEKS, DEFAULT_QUESTION_COUNT, MAX_DURATION_WEEKS, MAX_SUBJECT_CHARS,
    outline::{CourseOutline, TopicQuiz},
    provenance::{FallbackReason, Generated, Provenance},
    quiz::{OPTIONS_PER_QUESTION, QuestionSpec, QuizResult},
    request::{Difficulty, GenerationKind, GenerationRequest},
    roadmap::{RoadmapResult, TopicSpec},
};
pub use fallback::FallbackGenerator;
pub use normalize::{ParseOutcome, ParseTier, clean_response, parse_resilient};
pub use prompt::PromptTemplate;
pub use validation::{is_valid_quiz, is_valid_roadmap};
