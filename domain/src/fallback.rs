//! Deterministic placeholder content.
//!
//! Used whenever the model path fails. Output depends only on the request,
//! involves no I/O, and always satisfies the schema validators.

use crate::course::quiz::{QuestionSpec, QuizResult};
use crate::course::request::{Difficulty, GenerationRequest};
use crate::course::roadmap::{RoadmapResult, TopicSpec};
use tracing::warn;

/// Generator for offline placeholder roadmaps and quizzes
pub struct FallbackGenerator;

impl FallbackGenerator {
    /// Number of questions in the fixed fallback bank.
    ///
    /// This is also the guaranteed number of fallback questions: requests for
    /// more receive exactly this many.
    pub const QUIZ_BANK_SIZE: usize = 2;

    /// Two-topic skeleton roadmap for the request's subject.
    pub fn roadmap(request: &GenerationRequest) -> RoadmapResult {
        Self::roadmap_for(request.subject_name(), request.difficulty())
    }

    pub fn roadmap_for(subject: &str, difficulty: Difficulty) -> RoadmapResult {
        RoadmapResult {
            description: format!(
                "Master {subject} with our AI-curated learning path ({difficulty} level)."
            ),
            topics: vec![
                TopicSpec::new(
                    format!("Introduction to {subject}"),
                    format!("Basic concepts and setup for {subject}"),
                    "2 hours",
                    Self::topic_notes("Introduction", subject),
                ),
                TopicSpec::new(
                    "Core Concepts",
                    "Fundamental principles and theories",
                    "4 hours",
                    Self::topic_notes("Core Concepts", subject),
                ),
            ],
        }
    }

    /// Questions from the fixed bank, truncated to the requested count.
    pub fn quiz(request: &GenerationRequest) -> QuizResult {
        Self::quiz_for(
            request.topic_title(),
            request.subject_name(),
            request.question_count(),
        )
    }

    pub fn quiz_for(topic: &str, subject: &str, count: usize) -> QuizResult {
        if count > Self::QUIZ_BANK_SIZE {
            warn!(
                requested = count,
                available = Self::QUIZ_BANK_SIZE,
                "Fallback quiz bank is smaller than the requested question count"
            );
        }

        let bank = [
            QuestionSpec {
                id: "1".to_string(),
                question: format!("What is the main purpose of {topic}?"),
                options: [
                    "Fundamental understanding".to_string(),
                    "Random usage".to_string(),
                    "Deprecated topic".to_string(),
                    "Unrelated concept".to_string(),
                ],
                correct_answer: 0,
                explanation: "It's a fundamental concept needed before moving ahead.".to_string(),
            },
            QuestionSpec {
                id: "2".to_string(),
                question: format!("How does {topic} help in {subject}?"),
                options: [
                    "Doesn't help at all".to_string(),
                    "Helps understand core logic".to_string(),
                    "Is optional".to_string(),
                    "Only theoretical".to_string(),
                ],
                correct_answer: 1,
                explanation: format!("It helps build a solid base for {subject}."),
            },
        ];

        QuizResult::new(bank.into_iter().take(count).collect())
    }

    fn topic_notes(topic: &str, subject: &str) -> String {
        let slug = topic.to_lowercase();
        format!(
            r#"# {topic}

## Overview
Key concepts about {topic} in {subject}.

## What You'll Learn
- Fundamental principles
- Practical applications
- Common use cases

## Example
```
Practical {slug} example for {subject}
```"#
        )
    }
}
