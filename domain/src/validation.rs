//! Structural validation of parsed model output.
//!
//! Both predicates check types, not just key presence. A `false` result is
//! not an error: the orchestrator treats it as the signal to fall back.

use crate::course::quiz::OPTIONS_PER_QUESTION;
use serde_json::Value;
use std::collections::HashSet;

const TOPIC_STRING_FIELDS: [&str; 3] = ["title", "description", "notes"];

/// `true` iff `value` is a roadmap object with a string `description` and a
/// non-empty `topics` array whose entries carry string `title`,
/// `description` and `notes`.
///
/// `estimated_time` is optional, but when present must be a string or number.
pub fn is_valid_roadmap(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    if !object.get("description").is_some_and(Value::is_string) {
        return false;
    }
    let Some(topics) = object.get("topics").and_then(Value::as_array) else {
        return false;
    };

    !topics.is_empty() && topics.iter().all(is_valid_topic)
}

fn is_valid_topic(topic: &Value) -> bool {
    let Some(topic) = topic.as_object() else {
        return false;
    };
    let strings_ok = TOPIC_STRING_FIELDS
        .iter()
        .all(|field| topic.get(*field).is_some_and(Value::is_string));
    let time_ok = match topic.get("estimated_time") {
        None => true,
        Some(v) => v.is_string() || v.is_number(),
    };
    strings_ok && time_ok
}

/// `true` iff `value` is an array of questions, each with an `id` (string or
/// integer, unique within the quiz), string `question` and `explanation`,
/// exactly four string `options`, and an integer `correct_answer` in `0..=3`.
pub fn is_valid_quiz(value: &Value) -> bool {
    let Some(questions) = value.as_array() else {
        return false;
    };

    let mut seen_ids = HashSet::new();
    questions.iter().all(|question| {
        question_id(question).is_some_and(|id| seen_ids.insert(id)) && is_valid_question(question)
    })
}

fn question_id(question: &Value) -> Option<String> {
    match question.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.is_u64() || n.is_i64() => Some(n.to_string()),
        _ => None,
    }
}

fn is_valid_question(question: &Value) -> bool {
    let Some(question) = question.as_object() else {
        return false;
    };

    let text_ok = ["question", "explanation"]
        .iter()
        .all(|field| question.get(*field).is_some_and(Value::is_string));

    let options_ok = question
        .get("options")
        .and_then(Value::as_array)
        .is_some_and(|options| {
            options.len() == OPTIONS_PER_QUESTION && options.iter().all(Value::is_string)
        });

    let answer_ok = question
        .get("correct_answer")
        .and_then(Value::as_u64)
        .is_some_and(|index| index < OPTIONS_PER_QUESTION as u64);

    text_ok && options_ok && answer_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn question(id: Value, options: Value, correct_answer: Value) -> Value {
        json!({
            "id": id,
            "question": "q",
            "options": options,
            "correct_answer": correct_answer,
            "explanation": "e"
        })
    }

    // ==================== Roadmap ====================

    #[test]
    fn test_valid_roadmap() {
        let value = json!({
            "description": "D",
            "topics": [
                {"title": "T", "description": "Td", "estimated_time": "2 hours", "notes": "N"},
                {"title": "T2", "description": "Td2", "notes": "N2"}
            ]
        });
        assert!(is_valid_roadmap(&value));
    }

    #[test]
    fn test_roadmap_requires_topics() {
        assert!(!is_valid_roadmap(&json!({"description": "D", "topics": []})));
        assert!(!is_valid_roadmap(&json!({"description": "D"})));
        assert!(!is_valid_roadmap(&json!({"description": "D", "topics": "T"})));
    }

    #[test]
    fn test_roadmap_checks_types() {
        assert!(!is_valid_roadmap(&json!({
            "description": 1,
            "topics": [{"title": "T", "description": "Td", "notes": "N"}]
        })));
        assert!(!is_valid_roadmap(&json!({
            "description": "D",
            "topics": [{"title": "T", "description": "Td", "notes": null}]
        })));
        assert!(!is_valid_roadmap(&json!({
            "description": "D",
            "topics": [{"title": "T", "description": "Td", "notes": "N", "estimated_time": []}]
        })));
        assert!(!is_valid_roadmap(&json!({"description": "D", "topics": ["T"]})));
        assert!(!is_valid_roadmap(&json!([1, 2])));
    }

    // ==================== Quiz ====================

    #[test]
    fn test_quiz_rejects_three_options() {
        let value = json!([question(json!("1"), json!(["a", "b", "c"]), json!(0))]);
        assert!(!is_valid_quiz(&value));
    }

    #[test]
    fn test_quiz_accepts_well_formed() {
        let value = json!([question(json!("1"), json!(["a", "b", "c", "d"]), json!(3))]);
        assert!(is_valid_quiz(&value));
    }

    #[test]
    fn test_quiz_correct_answer_range() {
        let options = json!(["a", "b", "c", "d"]);
        assert!(!is_valid_quiz(&json!([question(json!("1"), options.clone(), json!(4))])));
        assert!(!is_valid_quiz(&json!([question(json!("1"), options.clone(), json!(-1))])));
        assert!(!is_valid_quiz(&json!([question(json!("1"), options.clone(), json!("0"))])));
        assert!(!is_valid_quiz(&json!([question(json!("1"), options, json!(1.5))])));
    }

    #[test]
    fn test_quiz_ids() {
        let options = json!(["a", "b", "c", "d"]);
        assert!(is_valid_quiz(&json!([
            question(json!(1), options.clone(), json!(0)),
            question(json!(2), options.clone(), json!(1))
        ])));
        assert!(!is_valid_quiz(&json!([
            question(json!("1"), options.clone(), json!(0)),
            question(json!(1), options.clone(), json!(1))
        ])));
        assert!(!is_valid_quiz(&json!([question(json!(null), options, json!(0))])));
    }

    #[test]
    fn test_quiz_checks_shape() {
        assert!(!is_valid_quiz(&json!({"questions": []})));
        assert!(!is_valid_quiz(&json!(["not an object"])));
        assert!(!is_valid_quiz(&json!([question(
            json!("1"),
            json!(["a", "b", "c", 4]),
            json!(0)
        )])));
        assert!(is_valid_quiz(&json!([])));
    }
}
