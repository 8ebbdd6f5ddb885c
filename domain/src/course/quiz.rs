//! Quiz entities

use super::json_scalar_to_string;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of answer options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// Unique within its quiz
    pub id: String,
    pub question: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    /// Index into `options`, always in `0..4`
    pub correct_answer: u8,
    pub explanation: String,
}

impl QuestionSpec {
    pub fn correct_option(&self) -> &str {
        &self.options[usize::from(self.correct_answer)]
    }

    fn from_value(value: &Value) -> Option<Self> {
        let options_json = value.get("options")?.as_array()?;
        let options: Vec<String> = options_json
            .iter()
            .map(|o| o.as_str().map(str::to_string))
            .collect::<Option<_>>()?;
        let options: [String; OPTIONS_PER_QUESTION] = options.try_into().ok()?;

        let correct_answer = value.get("correct_answer")?.as_u64()?;
        if correct_answer >= OPTIONS_PER_QUESTION as u64 {
            return None;
        }

        Some(Self {
            id: value.get("id").and_then(json_scalar_to_string)?,
            question: value.get("question")?.as_str()?.to_string(),
            options,
            correct_answer: correct_answer as u8,
            explanation: value.get("explanation")?.as_str()?.to_string(),
        })
    }
}

/// An ordered set of questions about one topic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizResult {
    pub questions: Vec<QuestionSpec>,
}

impl QuizResult {
    pub fn new(questions: Vec<QuestionSpec>) -> Self {
        Self { questions }
    }

    /// Build a quiz from a JSON array that passed
    /// [`is_valid_quiz`](crate::validation::is_valid_quiz).
    ///
    /// Numeric ids are rendered as strings; content is otherwise unchanged.
    pub fn from_value(value: &Value) -> Option<Self> {
        let questions = value
            .as_array()?
            .iter()
            .map(QuestionSpec::from_value)
            .collect::<Option<Vec<_>>>()?;
        Some(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!([{
            "id": 1,
            "question": "q",
            "options": ["a", "b", "c", "d"],
            "correct_answer": 3,
            "explanation": "e"
        }])
    }

    #[test]
    fn test_from_value_numeric_id() {
        let quiz = QuizResult::from_value(&sample()).unwrap();
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz.questions[0].id, "1");
        assert_eq!(quiz.questions[0].correct_option(), "d");
    }

    #[test]
    fn test_from_value_rejects_three_options() {
        let value = json!([{
            "id": "1",
            "question": "q",
            "options": ["a", "b", "c"],
            "correct_answer": 0,
            "explanation": "e"
        }]);
        assert!(QuizResult::from_value(&value).is_none());
    }

    #[test]
    fn test_serializes_as_array() {
        let quiz = QuizResult::from_value(&sample()).unwrap();
        let value = serde_json::to_value(&quiz).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["correct_answer"], 3);
        assert_eq!(value[0]["id"], "1");
    }
}
