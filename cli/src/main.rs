//! CLI entrypoint for Expert Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use council_application::{
    ProgressNotifier, QueuedQuestions, QuestionSource, RunDeliberationError,
    RunDeliberationUseCase,
};
use council_infrastructure::{ConfigLoader, FileConfig, FileExpertConfig, FileOutputFormat, HttpLlmGateway};
use council_presentation::{
    Cli, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress, TerminalQuestionSource,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let (writer, _log_guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting Expert Council");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let experts = config.to_experts();
    let gateway = Arc::new(
        HttpLlmGateway::new(&experts, config.client.timeout())
            .context("Failed to build HTTP client")?,
    );

    info!("Registered {} generation backends", gateway.len());

    let mut use_case = RunDeliberationUseCase::from_experts(
        gateway,
        experts,
        &config.critic,
        config.to_session_params(),
    )
    .context("Invalid council")?;

    let one_shot = cli.question.is_some();
    let mut input: Box<dyn QuestionSource> = match cli.question {
        Some(question) => Box::new(QueuedQuestions::new([question])),
        None => Box::new(TerminalQuestionSource::stdin()),
    };

    let progress: Box<dyn ProgressNotifier> = if config.output.show_progress {
        Box::new(ProgressReporter::new().with_question_echo(one_shot))
    } else {
        Box::new(SimpleProgress::new().with_question_echo(one_shot))
    };

    let result = tokio::select! {
        result = use_case.interact_with_progress(input.as_mut(), progress.as_ref()) => result,
        _ = tokio::signal::ctrl_c() => {
            println!("\nProgram interrupted by the user.");
            return Ok(());
        }
    };

    match result {
        Ok(outcome) => {
            println!("{}", outcome.message());
            if config.output.format == FileOutputFormat::Json {
                println!("{}", ConsoleFormatter::format_json(use_case.transcript()));
            }
        }
        Err(e) => report_failure(&e),
    }

    Ok(())
}

/// Command-line flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if !cli.expert.is_empty() {
        config.experts = cli
            .expert
            .iter()
            .map(|s| FileExpertConfig::from(s.as_str()))
            .collect();
    }
    if let Some(critic) = &cli.critic {
        config.critic = critic.clone();
    }
    if let Some(max_rounds) = cli.max_rounds {
        config.session.max_rounds = max_rounds;
    }
    if let Some(max_tokens) = cli.max_tokens {
        config.session.max_tokens = max_tokens;
    }
    if let Some(timeout) = cli.timeout {
        config.client.timeout_seconds = timeout;
    }
    if let Some(base_url) = &cli.base_url {
        config.client.base_url = base_url.clone();
    }
    if let Some(format) = cli.output {
        config.output.format = match format {
            OutputFormat::Text => FileOutputFormat::Text,
            OutputFormat::Json => FileOutputFormat::Json,
        };
    }
    if cli.quiet {
        config.output.show_progress = false;
    }
    if cli.no_color {
        config.output.color = false;
    }
    if cli.question.is_some() {
        config.session.max_rounds = 1;
    }
}

fn report_failure(e: &RunDeliberationError) {
    error!("Deliberation failed: {}", e);
    println!("An error occurred during the interaction process.");
    println!("{}", e);
}
