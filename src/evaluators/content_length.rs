use serde::Serialize;
use tracing::debug;

use super::steps::{Step, at_least};
use super::{CriterionDetails, EvaluationContext, Evaluator, SubScoreResult, points};
use crate::config::{CriterionId, ScoringConfig};
use crate::error::ScoringError;
use crate::lexical::count_words;

/// Word-count breakpoints between the minimum and maximum length, mapping to
/// one fifth of the weight each.
const LENGTH_STEPS: &[Step] = &[
    Step {
        bound: 2000.0,
        fraction: 1.0,
    },
    Step {
        bound: 500.0,
        fraction: 0.8,
    },
    Step {
        bound: 200.0,
        fraction: 0.6,
    },
    Step {
        bound: 100.0,
        fraction: 0.4,
    },
    Step {
        bound: 50.0,
        fraction: 0.2,
    },
];

#[derive(Debug, Default, Clone, Copy)]
pub struct ContentLengthEvaluator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthLevel {
    Insufficient,
    Minimal,
    Short,
    Medium,
    Long,
    VeryLong,
}

impl LengthLevel {
    pub fn from_word_count(words: usize) -> Self {
        match words {
            0..50 => Self::Insufficient,
            50..100 => Self::Minimal,
            100..200 => Self::Short,
            200..500 => Self::Medium,
            500..2000 => Self::Long,
            _ => Self::VeryLong,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentLengthDetails {
    pub word_count: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub length_level: LengthLevel,
}

/// Fraction of the weight earned by `words` given the configured bounds.
fn length_fraction(words: usize, min_words: usize, max_words: usize) -> f64 {
    if words < min_words {
        0.0
    } else if words >= max_words {
        1.0
    } else {
        at_least(words as f64, LENGTH_STEPS)
    }
}

impl Evaluator for ContentLengthEvaluator {
    fn criterion_id(&self) -> CriterionId {
        CriterionId::ContentLength
    }

    fn evaluate(
        &self,
        ctx: &EvaluationContext<'_>,
        config: &ScoringConfig,
    ) -> Result<SubScoreResult, ScoringError> {
        let criterion = self.criteria_info(config)?;
        let thresholds = &config.thresholds;
        let word_count = count_words(ctx.text);
        let fraction = length_fraction(word_count, thresholds.min_words, thresholds.max_words);
        let score = points(criterion.weight, fraction);

        debug!(words = word_count, score, "content length evaluated");

        Ok(SubScoreResult::new(
            criterion,
            score,
            CriterionDetails::ContentLength(ContentLengthDetails {
                word_count,
                min_words: thresholds.min_words,
                max_words: thresholds.max_words,
                length_level: LengthLevel::from_word_count(word_count),
            }),
        ))
    }
}

#[cfg(test)]
#[path = "content_length_test.rs"]
mod tests;
