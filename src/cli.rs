/// CLI argument definitions for the `seoscore` command.
///
/// Subcommands map one to one onto the scoring engine operations.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;
use crate::telemetry;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "seoscore", version, about = "Score SEO copy against a weighted rubric")]
pub struct Cli {
    /// Log level or filter directive (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = telemetry::DEFAULT_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Rubric selection shared by every command that reads the configuration.
#[derive(Args)]
pub struct RubricArgs {
    /// TOML rubric file overriding the built-in rubric
    #[arg(long, value_name = "PATH")]
    pub rubric: Option<PathBuf>,

    /// Disable a criterion before running (repeatable)
    #[arg(long = "disable", value_name = "CRITERION")]
    pub disabled: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a text file (or stdin) against the rubric
    #[command(long_about = cli_help::SCORE)]
    Score {
        /// Text file to score; `-` or nothing reads stdin
        file: Option<PathBuf>,

        /// Target keyword (repeatable, or comma-separated)
        #[arg(short, long = "keyword", value_delimiter = ',')]
        keywords: Vec<String>,

        #[command(flatten)]
        rubric: RubricArgs,

        /// Topic detector: local, openai or none
        #[arg(long, default_value = "local")]
        topic: String,

        /// Maximum wait for the topic detector, in milliseconds
        #[arg(long, default_value = "5000")]
        topic_timeout_ms: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the active rubric
    Config {
        #[command(flatten)]
        rubric: RubricArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the rubric for consistency (exit code 1 when invalid)
    #[command(long_about = cli_help::VALIDATE)]
    Validate {
        #[command(flatten)]
        rubric: RubricArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every criterion, enabled or not
    Criteria {
        #[command(flatten)]
        rubric: RubricArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect the dominant theme, thematic keywords and synonyms of a text
    Theme {
        /// Text file to analyze; `-` or nothing reads stdin
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions to stdout
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
