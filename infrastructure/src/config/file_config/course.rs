//! Course defaults from TOML (`[course]` section)

use coursegen_application::PipelineConfig;
use coursegen_domain::{DEFAULT_DURATION_WEEKS, DEFAULT_QUESTION_COUNT, Difficulty};
use serde::{Deserialize, Serialize};

/// Raw course configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCourseConfig {
    /// Questions generated per topic by `course` (default: 5)
    pub questions_per_topic: usize,
    /// Difficulty used when the CLI flag is omitted
    pub default_difficulty: Difficulty,
    /// Duration used when the CLI flag is omitted (default: 4)
    pub default_weeks: u32,
    /// Quiz generations in flight at once during `course` (default: 2)
    pub max_concurrent_quizzes: usize,
}

impl Default for FileCourseConfig {
    fn default() -> Self {
        Self {
            questions_per_topic: DEFAULT_QUESTION_COUNT,
            default_difficulty: Difficulty::default(),
            default_weeks: DEFAULT_DURATION_WEEKS,
            max_concurrent_quizzes: PipelineConfig::DEFAULT_MAX_CONCURRENT_QUIZZES,
        }
    }
}
