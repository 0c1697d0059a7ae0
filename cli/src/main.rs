//! CLI entrypoint for quizdash
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use quizdash_application::{RunQuizInput, RunQuizUseCase};
use quizdash_infrastructure::{ConfigLoader, CsvProblemSource, StdinAnswerSource};
use quizdash_presentation::{Cli, ConsolePrompter, OutputFormat, ScoreFormatter};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level. Diagnostics go to
    // stderr; stdout carries only the prompts and the score line.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Effective settings: defaults < config files < CLI flags
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    let source_path = cli.csv.unwrap_or(config.quiz.problems);
    let time_limit = Duration::from_secs(cli.limit.unwrap_or(config.quiz.limit_secs));

    info!(
        source = %source_path.display(),
        limit_secs = time_limit.as_secs(),
        "starting quiz session"
    );

    // === Dependency Injection ===
    let problems = Arc::new(CsvProblemSource::new(source_path));
    let answers = Arc::new(StdinAnswerSource::new());
    let prompter = ConsolePrompter::new();

    let use_case = RunQuizUseCase::new(problems, answers);
    let report = use_case
        .execute_with_prompter(RunQuizInput::new(time_limit), &prompter)
        .await?;

    let score = match cli.output {
        OutputFormat::Text => ScoreFormatter::format(&report),
        OutputFormat::Json => ScoreFormatter::format_json(&report),
    };
    println!("{}", score);

    Ok(())
}
