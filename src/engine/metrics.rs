use serde::Serialize;

use super::recommendations::percentage;
use crate::config::{CriterionId, ScoringConfig};
use crate::evaluators::SubScoreResult;
use crate::lexical::{count_words, paragraphs, sentences};

/// Share of the weight at or above which a criterion counts as excellent.
const EXCELLENT_RATIO: f64 = 0.8;
/// Share of the weight below which a criterion needs improvement.
const WEAK_RATIO: f64 = 0.6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStatistics {
    pub word_count: usize,
    pub character_count: usize,
    pub paragraph_count: usize,
    pub sentence_count: usize,
    pub average_words_per_paragraph: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreShare {
    pub criterion_id: CriterionId,
    pub name: String,
    pub score: u32,
    pub weight: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalPerformance {
    /// Mean of per-criterion percentages.
    pub average_percentage: u32,
    pub excellent_criteria: usize,
    pub needs_improvement: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub text_statistics: TextStatistics,
    pub score_distribution: Vec<ScoreShare>,
    pub global_performance: GlobalPerformance,
}

pub fn text_statistics(text: &str) -> TextStatistics {
    let word_count = count_words(text);
    let paragraph_count = paragraphs(text).len();
    TextStatistics {
        word_count,
        character_count: text.chars().count(),
        paragraph_count,
        sentence_count: sentences(text).len(),
        average_words_per_paragraph: if paragraph_count == 0 {
            0.0
        } else {
            word_count as f64 / paragraph_count as f64
        },
    }
}

pub fn compute(text: &str, results: &[SubScoreResult], config: &ScoringConfig) -> Metrics {
    let score_distribution = results
        .iter()
        .map(|r| ScoreShare {
            criterion_id: r.criterion_id,
            name: config
                .criterion(r.criterion_id)
                .map_or_else(|_| r.criterion_id.to_string(), |c| c.name.clone()),
            score: r.score,
            weight: r.max_score,
            percentage: percentage(r.ratio()),
        })
        .collect();

    let average = if results.is_empty() {
        0.0
    } else {
        results.iter().map(SubScoreResult::ratio).sum::<f64>() / results.len() as f64
    };

    Metrics {
        text_statistics: text_statistics(text),
        score_distribution,
        global_performance: GlobalPerformance {
            average_percentage: percentage(average),
            excellent_criteria: results.iter().filter(|r| r.ratio() >= EXCELLENT_RATIO).count(),
            needs_improvement: results.iter().filter(|r| r.ratio() < WEAK_RATIO).count(),
        },
    }
}
