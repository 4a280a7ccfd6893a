//! Readability: vocabulary density plus paragraph structure.
//!
//! Density peaks in a mid range: a very repetitive text is dull, while a very
//! high ratio of distinct words mostly signals a text too short to judge.

use serde::Serialize;
use tracing::debug;

use super::{CriterionDetails, EvaluationContext, Evaluator, SubScoreResult, halves, points};
use crate::config::{Criterion, CriterionId, ScoringConfig, Thresholds};
use crate::error::ScoringError;
use crate::lexical::{count_words, normalized_words, paragraphs, sentences, vocabulary_diversity};

/// `(low, high, fraction)`: densities within `low..=high` earn `fraction`.
/// Narrowest band first.
const DENSITY_BANDS: &[(f64, f64, f64)] = &[
    (0.6, 0.8, 1.0),
    (0.5, 0.9, 0.8),
    (0.4, 0.95, 0.6),
    (0.3, 1.0, 0.4),
];
const LOW_DENSITY_FRACTION: f64 = 0.2;

/// Below this many words, density is capped at the lowest band.
const SHORT_TEXT_WORDS: usize = 30;

/// Minimum average paragraph length of a "good" structure.
const GOOD_MIN_PARAGRAPH_WORDS: f64 = 30.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct ReadabilityEvaluator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureLevel {
    Ideal,
    Good,
    Fair,
    SingleParagraph,
    Poor,
}

impl StructureLevel {
    fn fraction(self) -> f64 {
        match self {
            Self::Ideal => 1.0,
            Self::Good => 0.7,
            Self::Fair => 0.4,
            Self::SingleParagraph => 0.2,
            Self::Poor => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityDetails {
    pub word_count: usize,
    pub vocabulary_diversity: f64,
    pub density_score: u32,
    pub density_max: u32,
    pub paragraph_count: usize,
    pub avg_words_per_paragraph: f64,
    pub structure_level: StructureLevel,
    pub structure_score: u32,
    pub structure_max: u32,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
}

fn density_fraction(diversity: f64, word_count: usize) -> f64 {
    let banded = DENSITY_BANDS
        .iter()
        .find(|(low, high, _)| diversity >= *low && diversity <= *high)
        .map_or(LOW_DENSITY_FRACTION, |(_, _, fraction)| *fraction);
    if word_count < SHORT_TEXT_WORDS {
        banded.min(LOW_DENSITY_FRACTION)
    } else {
        banded
    }
}

/// Paragraph bounds used to grade structure.
struct StructureRules {
    ideal_paragraphs: usize,
    ideal_min_words: f64,
    min_paragraphs: usize,
    max_words: f64,
}

impl StructureRules {
    fn new(criterion: &Criterion, thresholds: &Thresholds) -> Self {
        Self {
            ideal_paragraphs: criterion.threshold_or("ideal_paragraphs", 4.0).max(1.0) as usize,
            ideal_min_words: criterion.threshold_or("ideal_min_paragraph_words", 50.0),
            min_paragraphs: thresholds.min_paragraphs,
            max_words: thresholds.max_words_per_paragraph as f64,
        }
    }

    fn level(&self, count: usize, avg_words: f64) -> StructureLevel {
        if count >= self.ideal_paragraphs
            && avg_words >= self.ideal_min_words
            && avg_words <= self.max_words
        {
            StructureLevel::Ideal
        } else if count >= self.min_paragraphs
            && avg_words >= GOOD_MIN_PARAGRAPH_WORDS
            && avg_words <= self.max_words * 1.5
        {
            StructureLevel::Good
        } else if count >= self.min_paragraphs {
            StructureLevel::Fair
        } else if count == 1 && avg_words <= self.max_words {
            StructureLevel::SingleParagraph
        } else {
            StructureLevel::Poor
        }
    }
}

fn average(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

impl Evaluator for ReadabilityEvaluator {
    fn criterion_id(&self) -> CriterionId {
        CriterionId::Readability
    }

    fn evaluate(
        &self,
        ctx: &EvaluationContext<'_>,
        config: &ScoringConfig,
    ) -> Result<SubScoreResult, ScoringError> {
        let criterion = self.criteria_info(config)?;
        let (density_max, structure_max) = halves(criterion.weight);

        let word_count = count_words(ctx.text);
        let diversity = vocabulary_diversity(&normalized_words(ctx.text));
        let density_score = points(density_max, density_fraction(diversity, word_count));

        let paras = paragraphs(ctx.text);
        let para_words: usize = paras.iter().map(|p| count_words(p)).sum();
        let avg_words = average(para_words, paras.len());
        let level = StructureRules::new(criterion, &config.thresholds).level(paras.len(), avg_words);
        let structure_score = points(structure_max, level.fraction());

        let sentence_count = sentences(ctx.text).len();

        debug!(
            diversity,
            density = density_score,
            structure = ?level,
            "readability evaluated"
        );

        Ok(SubScoreResult::new(
            criterion,
            density_score + structure_score,
            CriterionDetails::Readability(ReadabilityDetails {
                word_count,
                vocabulary_diversity: diversity,
                density_score,
                density_max,
                paragraph_count: paras.len(),
                avg_words_per_paragraph: avg_words,
                structure_level: level,
                structure_score,
                structure_max,
                sentence_count,
                avg_sentence_length: average(word_count, sentence_count),
            }),
        ))
    }
}

#[cfg(test)]
#[path = "readability_test.rs"]
mod tests;
