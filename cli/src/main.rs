//! CLI entrypoint for coursegen
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use coursegen_application::{AiService, TextCompletionProvider};
use coursegen_domain::{ConfigIssue, OutputFormat};
use coursegen_infrastructure::{
    ConfigLoader, ConfigValidationError, FileConfig, GeminiProvider, OfflineProvider,
};
use coursegen_presentation::{
    Cli, Commands, ProgressReporter, SimpleProgress, formatter_for,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    info!("Starting coursegen");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    if cli.show_config {
        println!("{}", ConfigLoader::describe_sources(cli.config.as_ref()));
        println!();
        println!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    let issues = config.validate();
    report_issues(&issues);
    if ConfigIssue::has_errors(&issues) {
        bail!("invalid configuration");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command.clone() else {
        bail!("a subcommand is required (roadmap, quiz or course); see --help");
    };

    // === Dependency Injection ===
    let (provider, offline) = build_provider(&cli, &config)?;
    let mut pipeline = config.to_pipeline_config();
    if offline {
        // Nothing to retry against.
        pipeline.retry = pipeline.retry.clone().with_max_retries(1);
    }

    // Spinner on a terminal, plain lines when stderr is redirected
    let show_progress = !cli.quiet && config.output.show_progress;
    let reporter = (show_progress && std::io::stderr().is_terminal())
        .then(|| Arc::new(ProgressReporter::new()));
    let mut service = AiService::new(provider, pipeline);
    if let Some(reporter) = &reporter {
        service = service.with_progress(reporter.clone());
    } else if show_progress {
        service = service.with_progress(Arc::new(SimpleProgress));
    }

    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted; finishing with placeholder content");
            canceller.cancel();
        }
    });

    // === Execution ===
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let formatter = formatter_for(format);

    let output = match command {
        Commands::Roadmap {
            subject,
            difficulty,
            weeks,
        } => {
            let difficulty = difficulty.map(Into::into).unwrap_or(config.course.default_difficulty);
            let weeks = weeks.unwrap_or(config.course.default_weeks);
            let roadmap = service
                .generate_roadmap_with_cancellation(&subject, difficulty, weeks, &token)
                .await?;
            formatter.format_roadmap(&subject, &roadmap)
        }
        Commands::Quiz {
            topic,
            subject,
            count,
        } => {
            let quiz = service
                .generate_quiz_with_cancellation(&topic, &subject, count, &token)
                .await?;
            formatter.format_quiz(&topic, &quiz)
        }
        Commands::Course {
            subject,
            difficulty,
            weeks,
        } => {
            let difficulty = difficulty.map(Into::into).unwrap_or(config.course.default_difficulty);
            let weeks = weeks.unwrap_or(config.course.default_weeks);
            let course = service
                .generate_course_with_cancellation(&subject, difficulty, weeks, &token)
                .await?;
            formatter.format_course(&subject, &course)
        }
    };

    if let Some(reporter) = &reporter {
        reporter.finish();
    }

    println!("{}", output);

    Ok(())
}

/// Log level from `-v` count unless `RUST_LOG` is set. Logs go to stderr.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn report_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        let line = issue.to_string();
        if issue.is_error() {
            eprintln!("{}", line.red());
        } else {
            eprintln!("{}", line.yellow());
        }
    }
}

/// Gemini when an API key is available, otherwise the offline provider.
///
/// The second value is `true` for the offline provider.
fn build_provider(
    cli: &Cli,
    config: &FileConfig,
) -> Result<(Arc<dyn TextCompletionProvider>, bool)> {
    if cli.offline {
        info!("Offline mode requested");
        return Ok((Arc::new(OfflineProvider::new("offline mode requested")), true));
    }

    let timeout = config.retry.to_retry_policy().timeout;
    match config.provider.to_gemini_config(timeout) {
        Ok(gemini) => {
            info!(model = %gemini.model, "Using Gemini provider");
            let provider = GeminiProvider::new(gemini).context("failed to create Gemini client")?;
            Ok((Arc::new(provider), false))
        }
        Err(ConfigValidationError::MissingApiKey { env }) => {
            warn!(env = %env, "No API key configured; generating placeholder content");
            eprintln!(
                "{} no API key found (set ${env}); output will be placeholder content",
                "warning:".yellow().bold()
            );
            Ok((Arc::new(OfflineProvider::new(format!("no API key in ${env}"))), true))
        }
        Err(error) => Err(error.into()),
    }
}
