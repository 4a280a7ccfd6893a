//! Approximate originality.
//!
//! True duplicate detection needs a reference corpus, which this crate does
//! not have. The duplication rate here is a proxy computed from the text
//! alone: the share of word trigrams that repeat an earlier trigram. It is
//! deterministic and reported as an estimate, never as a plagiarism check.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::steps::{Step, at_most};
use super::{CriterionDetails, EvaluationContext, Evaluator, SubScoreResult, points, rate};
use crate::config::{CriterionId, ScoringConfig};
use crate::error::ScoringError;
use crate::lexical::{normalized_words, vocabulary_diversity};

const NOTE: &str = "approximate: estimated from repeated phrasing within the text, \
not verified against an external corpus";

const SHINGLE: usize = 3;

/// Duplication ceilings: ≤2% full, ≤5% 80%, ≤10% 60%, ≤20% 47%, ≤30% a third.
const UNIQUENESS_STEPS: &[Step] = &[
    Step {
        bound: 0.02,
        fraction: 1.0,
    },
    Step {
        bound: 0.05,
        fraction: 0.8,
    },
    Step {
        bound: 0.10,
        fraction: 0.6,
    },
    Step {
        bound: 0.20,
        fraction: 0.47,
    },
    Step {
        bound: 0.30,
        fraction: 0.33,
    },
];

#[derive(Debug, Default, Clone, Copy)]
pub struct UniquenessEvaluator;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniquenessDetails {
    /// Share of trigrams repeating an earlier one, in `[0, 1]`.
    pub duplication_rate: f64,
    pub originality: f64,
    /// `1 - distinct words / words`.
    pub word_repetition_ratio: f64,
    pub note: &'static str,
}

/// Share of word trigram occurrences already seen earlier in the text.
pub fn duplication_rate(words: &[String]) -> f64 {
    if words.len() < SHINGLE {
        return 0.0;
    }
    let mut seen = HashSet::new();
    let windows = words.windows(SHINGLE);
    let total = windows.len();
    let repeated = windows.filter(|w| !seen.insert(*w)).count();
    rate(repeated, total)
}

impl Evaluator for UniquenessEvaluator {
    fn criterion_id(&self) -> CriterionId {
        CriterionId::Uniqueness
    }

    fn evaluate(
        &self,
        ctx: &EvaluationContext<'_>,
        config: &ScoringConfig,
    ) -> Result<SubScoreResult, ScoringError> {
        let criterion = self.criteria_info(config)?;
        let words = normalized_words(ctx.text);
        let duplication = duplication_rate(&words);
        let repetition = if words.is_empty() {
            0.0
        } else {
            1.0 - vocabulary_diversity(&words)
        };
        let score = points(criterion.weight, at_most(duplication, UNIQUENESS_STEPS));

        debug!(duplication, score, "uniqueness evaluated");

        Ok(SubScoreResult::new(
            criterion,
            score,
            CriterionDetails::Uniqueness(UniquenessDetails {
                duplication_rate: duplication,
                originality: 1.0 - duplication,
                word_repetition_ratio: repetition,
                note: NOTE,
            }),
        ))
    }
}

#[cfg(test)]
#[path = "uniqueness_test.rs"]
mod tests;
