use serde::Serialize;
use tracing::debug;

use super::steps::{POSITION_STEPS, at_least};
use super::{CriterionDetails, EvaluationContext, Evaluator, SubScoreResult, halves, points, rate};
use crate::config::{CriterionId, ScoringConfig};
use crate::error::ScoringError;
use crate::lexical::{paragraphs, prefix_chars};

/// Characters inspected at the start of each paragraph when the criterion
/// does not set `paragraph_start_chars`.
const DEFAULT_START_CHARS: usize = 100;

/// Rewards keywords placed early: in the first paragraph and in the opening
/// characters of every paragraph. Keywords match as plain substrings of the
/// lowercased paragraph, so `chat` is found in `chats`.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordPositionEvaluator;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordPositionDetails {
    pub paragraph_count: usize,
    pub first_paragraph_score: u32,
    pub first_paragraph_max: u32,
    /// User keywords present in the first paragraph.
    pub keywords_in_first_paragraph: usize,
    pub paragraph_start_score: u32,
    pub paragraph_start_max: u32,
    /// Paragraphs whose opening characters contain a keyword.
    pub paragraphs_starting_with_keyword: usize,
    pub start_chars: usize,
}

impl Evaluator for KeywordPositionEvaluator {
    fn criterion_id(&self) -> CriterionId {
        CriterionId::KeywordPosition
    }

    fn evaluate(
        &self,
        ctx: &EvaluationContext<'_>,
        config: &ScoringConfig,
    ) -> Result<SubScoreResult, ScoringError> {
        let criterion = self.criteria_info(config)?;
        let start_chars = criterion
            .threshold_or("paragraph_start_chars", DEFAULT_START_CHARS as f64)
            .max(0.0) as usize;
        let keywords = ctx.target_keywords();
        let paras: Vec<String> = paragraphs(ctx.text)
            .into_iter()
            .map(str::to_lowercase)
            .collect();

        let in_first = paras.first().map_or(0, |first| {
            keywords.iter().filter(|k| first.contains(k.as_str())).count()
        });
        let with_start = paras
            .iter()
            .filter(|p| {
                let head = prefix_chars(p, start_chars);
                keywords.iter().any(|k| head.contains(k.as_str()))
            })
            .count();

        let (first_max, start_max) = halves(criterion.weight);
        let first_score = points(first_max, at_least(rate(in_first, keywords.len()), POSITION_STEPS));
        let start_score = points(start_max, at_least(rate(with_start, paras.len()), POSITION_STEPS));

        debug!(
            paragraphs = paras.len(),
            first = first_score,
            starts = start_score,
            "keyword position evaluated"
        );

        Ok(SubScoreResult::new(
            criterion,
            first_score + start_score,
            CriterionDetails::KeywordPosition(KeywordPositionDetails {
                paragraph_count: paras.len(),
                first_paragraph_score: first_score,
                first_paragraph_max: first_max,
                keywords_in_first_paragraph: in_first,
                paragraph_start_score: start_score,
                paragraph_start_max: start_max,
                paragraphs_starting_with_keyword: with_start,
                start_chars,
            }),
        ))
    }
}

#[cfg(test)]
#[path = "keyword_position_test.rs"]
mod tests;
