//! Output formatter trait

use coursegen_domain::{CourseOutline, Generated, OutputFormat, QuizResult, RoadmapResult};

/// Renders pipeline results for the terminal
pub trait OutputFormatter {
    fn format_roadmap(&self, subject: &str, roadmap: &Generated<RoadmapResult>) -> String;

    fn format_quiz(&self, topic: &str, quiz: &Generated<QuizResult>) -> String;

    fn format_course(&self, subject: &str, course: &CourseOutline) -> String;
}

/// Formatter for the requested output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(super::console::ConsoleFormatter),
        OutputFormat::Json => Box::new(super::console::JsonFormatter),
    }
}
