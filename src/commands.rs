//! Subcommand implementations: build the engine, run it, print the outcome.

use std::error::Error;
use std::io::{self, Read};
use std::path::Path;
use std::time::Duration;

use clap::CommandFactory;
use clap_complete::Shell;
use tracing::debug;

use crate::cli::{Cli, RubricArgs};
use crate::config::ScoringConfig;
use crate::engine::{ScoringEngine, text_statistics};
use crate::error::ScoringError;
use crate::lexical::thematic::analyze_thematic_keywords;
use crate::report;
use crate::report_helpers::print_json_stdout;
use crate::topic;

type CmdResult = Result<(), Box<dyn Error>>;

/// Read the whole input: a file, or stdin for `None` and `-`.
pub fn read_text(file: Option<&Path>) -> Result<String, ScoringError> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Engine over the built-in or file rubric, with `--disable` toggles applied.
pub fn build_engine(args: &RubricArgs) -> Result<ScoringEngine, ScoringError> {
    let config = match &args.rubric {
        Some(path) => ScoringConfig::load(path)?,
        None => ScoringConfig::default(),
    };
    let engine = ScoringEngine::new(config);
    for id in &args.disabled {
        engine.toggle_criterion(id, false)?;
    }
    Ok(engine)
}

pub fn score(
    file: Option<&Path>,
    keywords: &[String],
    rubric: &RubricArgs,
    topic_name: &str,
    timeout_ms: u64,
    json: bool,
) -> CmdResult {
    let mut engine = build_engine(rubric)?;
    if let Some(detector) = topic::detector_from_name(topic_name)? {
        debug!(detector = detector.name(), timeout_ms, "topic detector enabled");
        engine = engine.with_topic_detector(detector, Duration::from_millis(timeout_ms));
    }
    let text = read_text(file)?;
    let result = engine.evaluate(&text, keywords)?;
    if json {
        print_json_stdout(&result)?;
    } else {
        println!("{}", report::render_result(&result));
    }
    Ok(())
}

pub fn config(rubric: &RubricArgs, json: bool) -> CmdResult {
    let config = build_engine(rubric)?.configuration();
    if json {
        print_json_stdout(&*config)?;
    } else {
        println!("{}", report::render_config(&config));
    }
    Ok(())
}

pub fn validate(rubric: &RubricArgs, json: bool) -> CmdResult {
    let outcome = build_engine(rubric)?.validate_configuration();
    if json {
        print_json_stdout(&outcome)?;
    } else {
        println!("{}", report::render_validation(&outcome));
    }
    if outcome.valid {
        Ok(())
    } else {
        Err(format!("rubric is invalid ({} error(s))", outcome.errors.len()).into())
    }
}

pub fn criteria(rubric: &RubricArgs, json: bool) -> CmdResult {
    let criteria = build_engine(rubric)?.available_criteria();
    if json {
        print_json_stdout(&criteria)?;
    } else {
        println!("{}", report::render_criteria(&criteria));
    }
    Ok(())
}

pub fn theme(file: Option<&Path>, json: bool) -> CmdResult {
    let text = read_text(file)?;
    if text.trim().is_empty() {
        return Err(ScoringError::InvalidInput.into());
    }
    let analysis = analyze_thematic_keywords(&text);
    if json {
        print_json_stdout(&analysis)?;
    } else {
        println!(
            "{}",
            report::render_theme(&analysis, &text_statistics(&text))
        );
    }
    Ok(())
}

pub fn completions(shell: Shell) {
    clap_complete::generate(shell, &mut Cli::command(), "seoscore", &mut io::stdout());
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
