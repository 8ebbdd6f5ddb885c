//! Console output for roadmaps, quizzes and courses

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use coursegen_domain::{
    CourseOutline, Generated, Provenance, QuestionSpec, QuizResult, RoadmapResult,
};
use serde::Serialize;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Formats generated content for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format_roadmap(subject: &str, roadmap: &Generated<RoadmapResult>) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Roadmap: {subject}")));
        output.push('\n');
        output.push_str(&Self::provenance_line(&roadmap.provenance));
        output.push_str(&format!("\n{}\n", roadmap.content.description));

        for (i, topic) in roadmap.content.topics.iter().enumerate() {
            let title = format!("{}. {}", i + 1, topic.title);
            output.push_str(&Self::section_header(&title));
            output.push_str(&format!("{}\n", topic.description));
            if !topic.estimated_time.is_empty() {
                output.push_str(&format!(
                    "{} {}\n",
                    "Estimated time:".dimmed(),
                    topic.estimated_time
                ));
            }
            output.push('\n');
            output.push_str(&Self::indent(&topic.notes, "  "));
            output.push('\n');
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_quiz(topic: &str, quiz: &Generated<QuizResult>) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Quiz: {topic}")));
        output.push('\n');
        output.push_str(&Self::provenance_line(&quiz.provenance));
        output.push_str(&Self::questions(&quiz.content));
        output.push_str(&Self::footer());
        output
    }

    pub fn format_course(subject: &str, course: &CourseOutline) -> String {
        let mut output = Self::format_roadmap(subject, &course.roadmap);

        for topic_quiz in &course.quizzes {
            output.push_str(&Self::section_header(&format!(
                "Quiz: {}",
                topic_quiz.topic_title
            )));
            output.push_str(&Self::provenance_line(&topic_quiz.quiz.provenance));
            output.push_str(&Self::questions(&topic_quiz.quiz.content));
        }

        output.push_str(&format!(
            "\n{} {} topic(s), {} question(s)",
            "Summary:".cyan().bold(),
            course.roadmap.content.topics.len(),
            course.question_count()
        ));
        let fallbacks = course.fallback_count();
        if fallbacks > 0 {
            output.push_str(&format!(
                ", {}",
                format!("{fallbacks} part(s) from placeholder content").yellow()
            ));
        }
        output.push('\n');
        output.push_str(&Self::footer());
        output
    }

    /// Format any result as pretty JSON, provenance included
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn questions(quiz: &QuizResult) -> String {
        if quiz.is_empty() {
            return format!("\n{}\n", "No questions.".dimmed());
        }
        quiz.questions
            .iter()
            .enumerate()
            .map(|(i, question)| Self::question(i + 1, question))
            .collect()
    }

    fn question(number: usize, question: &QuestionSpec) -> String {
        let mut output = format!("\n{} {}\n", format!("Q{number}.").bold(), question.question);
        for (label, option) in OPTION_LABELS.iter().zip(&question.options) {
            output.push_str(&format!("   {label}) {option}\n"));
        }
        let answer = OPTION_LABELS[usize::from(question.correct_answer)];
        output.push_str(&format!(
            "   {} {}) {}\n",
            "Answer:".green().bold(),
            answer,
            question.correct_option()
        ));
        output.push_str(&format!("   {}\n", question.explanation.dimmed()));
        output
    }

    fn provenance_line(provenance: &Provenance) -> String {
        match provenance {
            Provenance::Model => String::new(),
            Provenance::Fallback { reason } => format!(
                "{}\n",
                format!("Note: placeholder content ({reason})").yellow()
            ),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_roadmap(&self, subject: &str, roadmap: &Generated<RoadmapResult>) -> String {
        Self::format_roadmap(subject, roadmap)
    }

    fn format_quiz(&self, topic: &str, quiz: &Generated<QuizResult>) -> String {
        Self::format_quiz(topic, quiz)
    }

    fn format_course(&self, subject: &str, course: &CourseOutline) -> String {
        Self::format_course(subject, course)
    }
}

/// Machine-readable output
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_roadmap(&self, _subject: &str, roadmap: &Generated<RoadmapResult>) -> String {
        ConsoleFormatter::format_json(roadmap)
    }

    fn format_quiz(&self, _topic: &str, quiz: &Generated<QuizResult>) -> String {
        ConsoleFormatter::format_json(quiz)
    }

    fn format_course(&self, _subject: &str, course: &CourseOutline) -> String {
        ConsoleFormatter::format_json(course)
    }
}
