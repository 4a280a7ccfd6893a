use thiserror::Error;

use crate::config::CriterionId;

/// Failures surfaced to callers of the scoring engine and its configuration.
///
/// Topic detection failures never appear here: they are recovered inside
/// the engine and reported as data (see `topic::TopicError`).
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("text to analyze must be a non-empty string")]
    InvalidInput,

    #[error("the scoring engine is disabled")]
    EngineDisabled,

    #[error("unknown criterion: {0}")]
    UnknownCriterion(String),

    #[error("criterion {criterion} failed: {message}")]
    Evaluator {
        criterion: CriterionId,
        message: String,
    },

    #[error("invalid rubric: {0}")]
    Rubric(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ScoringError {
    fn from(value: toml::de::Error) -> Self {
        Self::Rubric(value.to_string())
    }
}
