//! Prompt templates for roadmap and quiz generation

use crate::course::request::{GenerationKind, GenerationRequest};

/// Closing instruction shared by every prompt; models often wrap JSON in fences otherwise.
const RAW_JSON_ONLY: &str =
    "IMPORTANT: Return ONLY the raw JSON without any markdown formatting or code block wrappers.";

/// Templates for generating model prompts
///
/// Every template is a pure function of its input so the same request always
/// yields the same prompt.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Build the prompt matching the request kind.
    pub fn for_request(request: &GenerationRequest) -> String {
        match request.kind() {
            GenerationKind::Roadmap => Self::roadmap_prompt(request),
            GenerationKind::Quiz => Self::quiz_prompt(request),
        }
    }

    /// Prompt asking for a course roadmap object
    pub fn roadmap_prompt(request: &GenerationRequest) -> String {
        let difficulty = request.difficulty();
        format!(
            r#"Create a detailed learning roadmap for a course titled "{subject}".
- Target difficulty: {difficulty}
- Duration: {weeks} weeks

Return a JSON object with this exact structure:
{{
    "description": "Brief course description",
    "topics": [
        {{
            "title": "Topic Title",
            "description": "What this topic covers",
            "estimated_time": "e.g., '2 hours'",
            "notes": "Detailed learning notes for the topic, about half a page"
        }}
    ]
}}

Make it practical, {difficulty}-friendly, and clearly structured.
{RAW_JSON_ONLY}"#,
            subject = request.subject_name(),
            weeks = request.duration_weeks(),
        )
    }

    /// Prompt asking for a JSON array of quiz questions
    pub fn quiz_prompt(request: &GenerationRequest) -> String {
        format!(
            r#"Create a {count}-question quiz about "{topic}" in "{subject}".
Each question should have:
- "id": string (unique for each question)
- "question": the question text
- "options": array of exactly 4 answer options
- "correct_answer": index (0-3) of the correct option
- "explanation": a brief explanation of the answer

Return ONLY a JSON array of questions, no extra text.
{RAW_JSON_ONLY}"#,
            count = request.question_count(),
            topic = request.topic_title(),
            subject = request.subject_name(),
        )
    }
}
