//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Transcript lines as they are produced
    Text,
    /// Transcript lines, then the full transcript as JSON
    Json,
}

/// CLI arguments for expert-council
#[derive(Parser, Debug)]
#[command(name = "expert-council")]
#[command(author, version, about = "Expert Council - several local LLMs answer, one critiques and concludes")]
#[command(long_about = r#"
Expert Council poses each of your questions to a council of LLM backends.

Every round has three phases:
1. Initial answers: every expert answers the question in parallel
2. Critique: the critic reviews every other expert's answer
3. Synthesis: the critic writes the final answer from answers and critiques

Each reply carries a confidence level from 1 to 5. Press Enter on an empty
line to finish the session.

Configuration files are loaded from (in priority order):
1. COUNCIL_* environment variables
2. --config <path>     Explicit config file
3. ./council.toml      Project-level config
4. ~/.config/expert-council/config.toml   Global config

Example:
  expert-council
  expert-council "Why is the sky blue?"
  expert-council -e llama3 -e mistral=http://gpu-box:11434/api --critic llama3
"#)]
pub struct Cli {
    /// Ask a single question and exit instead of prompting
    pub question: Option<String>,

    /// Experts in the council, as NAME or NAME=URL (can be specified multiple times)
    #[arg(short, long, value_name = "NAME[=URL]")]
    pub expert: Vec<String>,

    /// Expert that critiques the others and writes the final answer
    #[arg(long, value_name = "NAME")]
    pub critic: Option<String>,

    /// Maximum number of rounds before the session ends
    #[arg(long, value_name = "N")]
    pub max_rounds: Option<usize>,

    /// Advisory output length sent with every generation call
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Timeout for a single generation call, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Base URL for experts given without an endpoint
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_experts_and_critic() {
        let cli = Cli::try_parse_from([
            "expert-council",
            "-e",
            "llama3",
            "--expert",
            "mistral=http://gpu-box:11434/api",
            "--critic",
            "llama3",
            "--max-rounds",
            "2",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.expert.len(), 2);
        assert_eq!(cli.expert[0], "llama3");
        assert_eq!(cli.expert[1], "mistral=http://gpu-box:11434/api");
        assert_eq!(cli.critic.as_deref(), Some("llama3"));
        assert_eq!(cli.max_rounds, Some(2));
        assert_eq!(cli.verbose, 2);
        assert!(cli.question.is_none());
    }

    #[test]
    fn test_parse_one_shot_question() {
        let cli = Cli::try_parse_from(["expert-council", "--output", "json", "Why is the sky blue?"])
            .unwrap();
        assert_eq!(cli.question.as_deref(), Some("Why is the sky blue?"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(cli.expert.is_empty());
    }
}
