//! Composite course output: a roadmap plus one quiz per topic.

use super::provenance::Generated;
use super::quiz::QuizResult;
use super::roadmap::RoadmapResult;
use serde::{Deserialize, Serialize};

/// Quiz generated for one roadmap topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicQuiz {
    pub topic_title: String,
    pub quiz: Generated<QuizResult>,
}

/// A roadmap together with its per-topic quizzes, in roadmap topic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOutline {
    pub roadmap: Generated<RoadmapResult>,
    pub quizzes: Vec<TopicQuiz>,
}

impl CourseOutline {
    /// Number of parts (roadmap and quizzes) that came from the fallback.
    pub fn fallback_count(&self) -> usize {
        usize::from(self.roadmap.is_fallback())
            + self.quizzes.iter().filter(|q| q.quiz.is_fallback()).count()
    }

    pub fn question_count(&self) -> usize {
        self.quizzes.iter().map(|q| q.quiz.content.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::provenance::FallbackReason;
    use crate::course::request::Difficulty;
    use crate::fallback::FallbackGenerator;

    #[test]
    fn test_counts() {
        let roadmap = FallbackGenerator::roadmap_for("Rust", Difficulty::Beginner);
        let quizzes = roadmap
            .topics
            .iter()
            .enumerate()
            .map(|(i, topic)| {
                let quiz = FallbackGenerator::quiz_for(&topic.title, "Rust", 2);
                TopicQuiz {
                    topic_title: topic.title.clone(),
                    quiz: if i == 0 {
                        Generated::from_model(quiz)
                    } else {
                        Generated::fallback(quiz, FallbackReason::Unparsed)
                    },
                }
            })
            .collect();

        let outline = CourseOutline {
            roadmap: Generated::from_model(roadmap),
            quizzes,
        };
        assert_eq!(outline.fallback_count(), 1);
        assert_eq!(outline.question_count(), 4);
    }

    #[test]
    fn test_serializes_provenance() {
        let outline = CourseOutline {
            roadmap: Generated::fallback(
                FallbackGenerator::roadmap_for("Rust", Difficulty::Beginner),
                FallbackReason::TransportFailure,
            ),
            quizzes: Vec::new(),
        };
        let json = serde_json::to_value(&outline).unwrap();
        assert_eq!(json["roadmap"]["provenance"]["source"], "fallback");
        assert_eq!(json["roadmap"]["provenance"]["reason"], "transport_failure");
    }
}
