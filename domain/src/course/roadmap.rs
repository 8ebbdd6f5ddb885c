//! Roadmap entities

use super::json_scalar_to_string;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One topic of a course roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSpec {
    pub title: String,
    pub description: String,
    /// Free-text duration such as "2 hours"
    pub estimated_time: String,
    pub notes: String,
}

impl TopicSpec {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        estimated_time: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            estimated_time: estimated_time.into(),
            notes: notes.into(),
        }
    }
}

/// A generated course outline: description plus ordered topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapResult {
    pub description: String,
    pub topics: Vec<TopicSpec>,
}

impl RoadmapResult {
    /// Build a roadmap from a JSON value that passed
    /// [`is_valid_roadmap`](crate::validation::is_valid_roadmap).
    ///
    /// Returns `None` if a required field is missing or has the wrong type.
    /// A missing `estimated_time` becomes an empty string; a numeric one is
    /// rendered as text.
    pub fn from_value(value: &Value) -> Option<Self> {
        let description = value.get("description")?.as_str()?.to_string();
        let topics_json = value.get("topics")?.as_array()?;
        if topics_json.is_empty() {
            return None;
        }

        let topics = topics_json
            .iter()
            .map(|topic| {
                Some(TopicSpec {
                    title: topic.get("title")?.as_str()?.to_string(),
                    description: topic.get("description")?.as_str()?.to_string(),
                    estimated_time: topic
                        .get("estimated_time")
                        .and_then(json_scalar_to_string)
                        .unwrap_or_default(),
                    notes: topic.get("notes")?.as_str()?.to_string(),
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            description,
            topics,
        })
    }

    pub fn topic_titles(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        let value = json!({
            "description": "D",
            "topics": [
                {"title": "T", "description": "Td", "estimated_time": "2 hours", "notes": "N"}
            ]
        });
        let roadmap = RoadmapResult::from_value(&value).unwrap();
        assert_eq!(roadmap.description, "D");
        assert_eq!(
            roadmap.topics,
            vec![TopicSpec::new("T", "Td", "2 hours", "N")]
        );
    }

    #[test]
    fn test_from_value_missing_estimated_time() {
        let value = json!({
            "description": "D",
            "topics": [{"title": "T", "description": "Td", "notes": "N"}]
        });
        let roadmap = RoadmapResult::from_value(&value).unwrap();
        assert_eq!(roadmap.topics[0].estimated_time, "");
    }

    #[test]
    fn test_from_value_rejects_wrong_types() {
        let value = json!({
            "description": "D",
            "topics": [{"title": 5, "description": "Td", "notes": "N"}]
        });
        assert!(RoadmapResult::from_value(&value).is_none());
        assert!(RoadmapResult::from_value(&json!({"description": "D", "topics": []})).is_none());
    }

    #[test]
    fn test_serializes_snake_case() {
        let roadmap = RoadmapResult {
            description: "D".to_string(),
            topics: vec![TopicSpec::new("T", "Td", "1 hour", "N")],
        };
        let value = serde_json::to_value(&roadmap).unwrap();
        assert_eq!(value["topics"][0]["estimated_time"], "1 hour");
    }
}
