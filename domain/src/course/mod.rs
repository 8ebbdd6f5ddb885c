//! Course content entities.
//!
//! - [`request::GenerationRequest`] — validated input for one generation call
//! - [`roadmap::RoadmapResult`] — a course outline with ordered topics
//! - [`quiz::QuizResult`] — multiple-choice questions for a single topic
//! - [`provenance::Generated`] — a result tagged with where it came from
//! - [`outline::CourseOutline`] — a roadmap plus one quiz per topic

pub mod outline;
pub mod provenance;
pub mod quiz;
pub mod request;
pub mod roadmap;

/// Maximum accepted subject name length, in characters.
pub const MAX_SUBJECT_CHARS: usize = 200;

/// Maximum accepted course duration, in weeks.
pub const MAX_DURATION_WEEKS: u32 = 12;

/// Duration used when the caller does not specify one.
pub const DEFAULT_DURATION_WEEKS: u32 = 4;

/// Question count used when the caller does not specify one.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// Render a JSON scalar as a string (strings as-is, numbers via `to_string`).
///
/// Null, booleans, and empty strings yield `None`.
pub(crate) fn json_scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
