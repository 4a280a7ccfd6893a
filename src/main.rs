mod cli;
mod cli_help;
mod commands;
mod config;
mod engine;
mod error;
mod evaluators;
mod lexical;
mod report;
mod report_helpers;
mod telemetry;
mod topic;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = telemetry::init(&cli.log_level) {
        eprintln!("warning: logging disabled: {err}");
    }

    let result = match cli.command {
        Commands::Score {
            file,
            keywords,
            rubric,
            topic,
            topic_timeout_ms,
            json,
        } => commands::score(
            file.as_deref(),
            &keywords,
            &rubric,
            &topic,
            topic_timeout_ms,
            json,
        ),
        Commands::Config { rubric, json } => commands::config(&rubric, json),
        Commands::Validate { rubric, json } => commands::validate(&rubric, json),
        Commands::Criteria { rubric, json } => commands::criteria(&rubric, json),
        Commands::Theme { file, json } => commands::theme(file.as_deref(), json),
        Commands::Completions { shell } => {
            commands::completions(shell);
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
