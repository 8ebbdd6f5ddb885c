//! Progress reporting for generation runs

use colored::Colorize;
use coursegen_application::{GenerationProgress, PipelineStage, ProviderError};
use coursegen_domain::{FallbackReason, GenerationKind};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner-based progress on stderr
///
/// A course run generates several items concurrently, so the spinner shows
/// the most recent stage and keeps a running count of finished items.
pub struct ProgressReporter {
    spinner: ProgressBar,
    state: Mutex<ReporterState>,
}

#[derive(Default)]
struct ReporterState {
    started: usize,
    finished: usize,
    fallbacks: usize,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self {
            spinner,
            state: Mutex::new(ReporterState::default()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Stop the spinner and print a one-line summary.
    pub fn finish(&self) {
        let (finished, fallbacks) = match self.state.lock() {
            Ok(state) => (state.finished, state.fallbacks),
            Err(_) => (0, 0),
        };
        let summary = if fallbacks == 0 {
            format!("{} {finished} item(s) generated", "v".green())
        } else {
            format!(
                "{} {finished} item(s) generated, {}",
                "!".yellow(),
                format!("{fallbacks} from placeholder content").yellow()
            )
        };
        self.spinner.finish_with_message(summary);
    }

    fn counter(&self) -> String {
        match self.state.lock() {
            Ok(state) => format!("[{}/{}]", state.finished, state.started),
            Err(_) => String::new(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationProgress for ProgressReporter {
    fn on_generation_start(&self, kind: GenerationKind, label: &str) {
        if let Ok(mut state) = self.state.lock() {
            state.started += 1;
        }
        self.spinner.set_prefix(self.counter());
        self.spinner.set_message(format!("Generating {kind}: {label}"));
    }

    fn on_stage(&self, kind: GenerationKind, stage: PipelineStage) {
        if !stage.is_terminal() {
            self.spinner.set_message(format!("{kind}: {stage}"));
        }
    }

    fn on_attempt_failed(&self, attempt: u32, max_attempts: u32, error: &ProviderError) {
        self.spinner.println(format!(
            "  {} attempt {attempt}/{max_attempts} failed: {error}",
            "x".red()
        ));
    }

    fn on_generation_complete(&self, kind: GenerationKind, fallback: Option<FallbackReason>) {
        if let Ok(mut state) = self.state.lock() {
            state.finished += 1;
            if fallback.is_some() {
                state.fallbacks += 1;
            }
        }
        self.spinner.set_prefix(self.counter());
        if let Some(reason) = fallback {
            self.spinner.println(format!(
                "  {} {kind} uses placeholder content ({reason})",
                "!".yellow()
            ));
        }
    }
}

/// Simple line-based progress on stderr (no spinner)
pub struct SimpleProgress;

impl GenerationProgress for SimpleProgress {
    fn on_generation_start(&self, kind: GenerationKind, label: &str) {
        eprintln!("{} Generating {} {}", "->".cyan(), kind, label.bold());
    }

    fn on_attempt_failed(&self, attempt: u32, max_attempts: u32, error: &ProviderError) {
        eprintln!("  {} attempt {attempt}/{max_attempts} failed: {error}", "x".red());
    }

    fn on_generation_complete(&self, kind: GenerationKind, fallback: Option<FallbackReason>) {
        match fallback {
            None => eprintln!("  {} {kind} done", "v".green()),
            Some(reason) => eprintln!("  {} {kind} uses placeholder content ({reason})", "!".yellow()),
        }
    }
}
