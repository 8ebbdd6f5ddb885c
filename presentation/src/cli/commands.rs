//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use coursegen_domain::{DEFAULT_QUESTION_COUNT, Difficulty};
use std::path::PathBuf;

/// Output format for generated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Text,
    /// JSON including provenance
    Json,
}

impl From<OutputFormat> for coursegen_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => coursegen_domain::OutputFormat::Text,
            OutputFormat::Json => coursegen_domain::OutputFormat::Json,
        }
    }
}

/// Course difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Advanced => Difficulty::Advanced,
        }
    }
}

/// CLI arguments for coursegen
#[derive(Parser, Debug)]
#[command(name = "coursegen")]
#[command(author, version, about = "Generate course roadmaps and quizzes with a generative text model")]
#[command(long_about = r#"
coursegen asks a generative text model for a course roadmap or a topic quiz,
recovers JSON from whatever the model returns, validates its structure, and
falls back to deterministic placeholder content when the model cannot be
reached or its answer is unusable. Upstream failures never fail the command.

The API key is read from provider.api_key or from the environment variable
named by provider.api_key_env (GEMINI_API_KEY by default). Without a key the
command runs offline and prints placeholder content.

Configuration files are loaded from (in priority order):
1. COURSEGEN_* environment variables (e.g. COURSEGEN_RETRY__MAX_RETRIES=3)
2. --config <path>     Explicit config file
3. ./coursegen.toml    Project-level config
4. ~/.config/coursegen/config.toml   Global config

Example:
  coursegen roadmap "Linear Algebra" --difficulty intermediate --weeks 6
  coursegen quiz "Eigenvalues" --subject "Linear Algebra" --count 3
  coursegen --output json course "Rust"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (overrides [output] format in config)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Never call the model; always print placeholder content
    #[arg(long, global = true)]
    pub offline: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate a course roadmap
    Roadmap {
        /// Course subject, e.g. "Linear Algebra"
        subject: String,

        /// Target difficulty (default: [course] default_difficulty)
        #[arg(short, long, value_enum)]
        difficulty: Option<DifficultyArg>,

        /// Course duration in weeks, 1-12 (default: [course] default_weeks)
        #[arg(short, long)]
        weeks: Option<u32>,
    },

    /// Generate a multiple-choice quiz for one topic
    Quiz {
        /// Topic the questions are about
        topic: String,

        /// Subject the topic belongs to
        #[arg(short, long)]
        subject: String,

        /// Number of questions
        #[arg(short, long, default_value_t = DEFAULT_QUESTION_COUNT)]
        count: usize,
    },

    /// Generate a roadmap and one quiz per topic
    Course {
        /// Course subject
        subject: String,

        /// Target difficulty (default: [course] default_difficulty)
        #[arg(short, long, value_enum)]
        difficulty: Option<DifficultyArg>,

        /// Course duration in weeks, 1-12 (default: [course] default_weeks)
        #[arg(short, long)]
        weeks: Option<u32>,
    },
}
