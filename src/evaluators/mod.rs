//! Per-criterion scoring units.
//!
//! Each evaluator owns one [`CriterionId`], reads its weight and thresholds
//! from the config snapshot it is handed, and returns a sub-score bounded by
//! that weight together with typed, explanatory details.

mod content_length;
mod keyword_position;
mod keyword_usage;
mod readability;
mod steps;
mod uniqueness;

use std::collections::HashSet;

use serde::Serialize;

use crate::config::{Criterion, CriterionId, ScoringConfig};
use crate::error::ScoringError;

pub use content_length::{ContentLengthDetails, ContentLengthEvaluator};
pub use keyword_position::{KeywordPositionDetails, KeywordPositionEvaluator};
pub use keyword_usage::{KeywordUsageDetails, KeywordUsageEvaluator};
pub use readability::{ReadabilityDetails, ReadabilityEvaluator};
pub use uniqueness::{UniquenessDetails, UniquenessEvaluator};

/// Input shared by every evaluator of one scoring call.
#[derive(Debug)]
pub struct EvaluationContext<'a> {
    pub text: &'a str,
    pub keywords: &'a [String],
    lower: String,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(text: &'a str, keywords: &'a [String]) -> Self {
        Self {
            text,
            keywords,
            lower: text.to_lowercase(),
        }
    }

    /// The text, lowercased once for all evaluators.
    pub fn lower_text(&self) -> &str {
        &self.lower
    }

    /// User keywords trimmed and lowercased, blanks and duplicates removed,
    /// first occurrence order kept.
    pub fn target_keywords(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty() && seen.insert(k.clone()))
            .collect()
    }
}

/// Criterion-specific explanation attached to a sub-score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CriterionDetails {
    KeywordUsage(KeywordUsageDetails),
    KeywordPosition(KeywordPositionDetails),
    ContentLength(ContentLengthDetails),
    Readability(ReadabilityDetails),
    Uniqueness(UniquenessDetails),
}

/// One criterion's contribution to a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubScoreResult {
    pub criterion_id: CriterionId,
    /// Always within `0..=max_score`.
    pub score: u32,
    /// The criterion's weight.
    pub max_score: u32,
    pub details: CriterionDetails,
}

impl SubScoreResult {
    fn new(criterion: &Criterion, score: u32, details: CriterionDetails) -> Self {
        Self {
            criterion_id: criterion.id,
            score: score.min(criterion.weight),
            max_score: criterion.weight,
            details,
        }
    }

    /// Share of the budget obtained, in `[0, 1]`. Zero-weight criteria count
    /// as fully satisfied.
    pub fn ratio(&self) -> f64 {
        if self.max_score == 0 {
            1.0
        } else {
            self.score as f64 / self.max_score as f64
        }
    }
}

/// A scoring unit for exactly one criterion.
pub trait Evaluator: Send + Sync {
    fn criterion_id(&self) -> CriterionId;

    /// The catalog entry this evaluator scores against.
    fn criteria_info<'c>(&self, config: &'c ScoringConfig) -> Result<&'c Criterion, ScoringError> {
        config.criterion(self.criterion_id())
    }

    fn is_enabled(&self, config: &ScoringConfig) -> bool {
        self.criteria_info(config).is_ok_and(|c| c.enabled)
    }

    fn evaluate(
        &self,
        ctx: &EvaluationContext<'_>,
        config: &ScoringConfig,
    ) -> Result<SubScoreResult, ScoringError>;
}

/// The five built-in evaluators in catalog order, without a topic detector.
pub fn default_evaluators() -> Vec<Box<dyn Evaluator>> {
    vec![
        Box::new(KeywordUsageEvaluator::default()),
        Box::new(KeywordPositionEvaluator),
        Box::new(ContentLengthEvaluator),
        Box::new(ReadabilityEvaluator),
        Box::new(UniquenessEvaluator),
    ]
}

/// Split a weight into two halves; the second gets the odd point.
fn halves(weight: u32) -> (u32, u32) {
    let first = weight / 2;
    (first, weight - first)
}

/// `budget * fraction`, rounded and kept within the budget.
fn points(budget: u32, fraction: f64) -> u32 {
    let raw = (budget as f64 * fraction.clamp(0.0, 1.0)).round() as u32;
    raw.min(budget)
}

/// `part / whole` with an empty whole counting as zero.
fn rate(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
