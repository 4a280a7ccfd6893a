use serde::Serialize;

use crate::config::{CriterionId, ScoringConfig};
use crate::evaluators::SubScoreResult;

/// Sub-scores below this share of their weight get a recommendation.
pub const RECOMMENDATION_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub criterion_id: CriterionId,
    pub criterion: String,
    pub current_score: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub message: &'static str,
}

/// Advice attached to a weak criterion.
pub fn message_for(id: CriterionId) -> &'static str {
    match id {
        CriterionId::KeywordUsage => {
            "Broaden the lexical field of your keywords with synonyms and variations."
        }
        CriterionId::KeywordPosition => {
            "Place your keywords in the first paragraph and at the start of the following ones."
        }
        CriterionId::ContentLength => {
            "Write longer content: at least 50 words, ideally more than 500."
        }
        CriterionId::Readability => {
            "Vary your vocabulary and split the content into clear, well-sized paragraphs."
        }
        CriterionId::Uniqueness => {
            "Avoid repeating the same phrasing to keep the text original."
        }
    }
}

/// One recommendation per sub-score below the threshold, in result order.
pub fn build(results: &[SubScoreResult], config: &ScoringConfig) -> Vec<Recommendation> {
    results
        .iter()
        .filter(|r| r.ratio() < RECOMMENDATION_THRESHOLD)
        .map(|r| Recommendation {
            criterion_id: r.criterion_id,
            criterion: config
                .criterion(r.criterion_id)
                .map_or_else(|_| r.criterion_id.to_string(), |c| c.name.clone()),
            current_score: r.score,
            max_score: r.max_score,
            percentage: percentage(r.ratio()),
            message: message_for(r.criterion_id),
        })
        .collect()
}

pub(super) fn percentage(ratio: f64) -> u32 {
    (ratio * 100.0).round() as u32
}
