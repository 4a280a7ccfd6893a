use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use super::steps::{USAGE_STEPS, at_least};
use super::{CriterionDetails, EvaluationContext, Evaluator, SubScoreResult, halves, points, rate};
use crate::config::{CriterionId, ScoringConfig, Thresholds};
use crate::error::ScoringError;
use crate::lexical::thematic::{ThematicAnalysis, analyze_thematic_keywords};
use crate::lexical::variations::lexical_variations;
use crate::lexical::{contains_word, count_word_matches, count_words};
use crate::topic::{self, TopicAnalysis, TopicDetector};

/// Scores keyword variety (declination) and clean whole-word use
/// (correspondence), over user keywords plus the text's thematic keywords.
pub struct KeywordUsageEvaluator {
    detector: Option<Arc<dyn TopicDetector>>,
    timeout: Duration,
}

impl Default for KeywordUsageEvaluator {
    fn default() -> Self {
        Self {
            detector: None,
            timeout: topic::DEFAULT_TIMEOUT,
        }
    }
}

impl KeywordUsageEvaluator {
    /// Consult `detector` (bounded by `timeout`) to label the text's topic in
    /// the details. The label never affects the score.
    pub fn with_topic_detector(detector: Arc<dyn TopicDetector>, timeout: Duration) -> Self {
        Self {
            detector: Some(detector),
            timeout,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclinationDetails {
    pub score: u32,
    pub max_score: u32,
    pub variations_total: usize,
    pub variations_found: usize,
    pub rate: f64,
    /// Variations occurring anywhere in the text, in generation order.
    pub found: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrespondenceDetails {
    pub score: u32,
    pub max_score: u32,
    /// Terms occurring anywhere, even inside longer words.
    pub keywords_found: usize,
    /// Terms occurring at least once as whole words.
    pub exact_matches: usize,
    pub rate: f64,
}

/// Density of one user keyword, in percent of total words.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordDensity {
    pub keyword: String,
    pub occurrences: usize,
    pub density: f64,
    pub within_bounds: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordUsageDetails {
    pub declination: DeclinationDetails,
    pub correspondence: CorrespondenceDetails,
    pub density: Vec<KeywordDensity>,
    pub thematic: ThematicAnalysis,
    pub topic_analysis: TopicAnalysis,
}

impl Evaluator for KeywordUsageEvaluator {
    fn criterion_id(&self) -> CriterionId {
        CriterionId::KeywordUsage
    }

    fn evaluate(
        &self,
        ctx: &EvaluationContext<'_>,
        config: &ScoringConfig,
    ) -> Result<SubScoreResult, ScoringError> {
        let criterion = self.criteria_info(config)?;
        let lower = ctx.lower_text();
        let targets = ctx.target_keywords();
        let thematic = analyze_thematic_keywords(ctx.text);
        let terms = scored_terms(&targets, &thematic);

        let (declination_max, correspondence_max) = halves(criterion.weight);
        let declination = score_declination(lower, &terms, declination_max);
        let correspondence = score_correspondence(lower, &terms, correspondence_max);
        let density = keyword_density(lower, &targets, count_words(ctx.text), &config.thresholds);

        let topic_analysis = match &self.detector {
            Some(detector) => topic::detect_with_timeout(Arc::clone(detector), ctx.text, self.timeout),
            None => TopicAnalysis::unavailable(),
        };

        debug!(
            terms = terms.len(),
            declination = declination.score,
            correspondence = correspondence.score,
            theme = thematic.theme,
            "keyword usage evaluated"
        );

        let score = declination.score + correspondence.score;
        Ok(SubScoreResult::new(
            criterion,
            score,
            CriterionDetails::KeywordUsage(KeywordUsageDetails {
                declination,
                correspondence,
                density,
                thematic,
                topic_analysis,
            }),
        ))
    }
}

/// User keywords first, then thematic keywords not already targeted.
fn scored_terms(targets: &[String], thematic: &ThematicAnalysis) -> Vec<String> {
    let mut seen: HashSet<&str> = targets.iter().map(String::as_str).collect();
    let extra: Vec<String> = thematic
        .keywords
        .iter()
        .map(|k| k.word.as_str())
        .filter(|w| seen.insert(*w))
        .map(str::to_string)
        .collect();
    targets.iter().cloned().chain(extra).collect()
}

fn score_declination(lower: &str, terms: &[String], max_score: u32) -> DeclinationDetails {
    let mut total = 0;
    let mut found = Vec::new();
    for term in terms {
        let variations = lexical_variations(term);
        total += variations.len();
        found.extend(
            variations
                .into_iter()
                .filter(|v| lower.contains(v.as_str())),
        );
    }
    let usage = rate(found.len(), total);
    DeclinationDetails {
        score: points(max_score, at_least(usage, USAGE_STEPS)),
        max_score,
        variations_total: total,
        variations_found: found.len(),
        rate: usage,
        found,
    }
}

fn score_correspondence(lower: &str, terms: &[String], max_score: u32) -> CorrespondenceDetails {
    let present: Vec<&String> = terms.iter().filter(|t| lower.contains(t.as_str())).collect();
    let exact = present
        .iter()
        .filter(|t| contains_word(lower, t))
        .count();
    let usage = rate(exact, present.len());
    CorrespondenceDetails {
        score: points(max_score, at_least(usage, USAGE_STEPS)),
        max_score,
        keywords_found: present.len(),
        exact_matches: exact,
        rate: usage,
    }
}

fn keyword_density(
    lower: &str,
    targets: &[String],
    word_count: usize,
    thresholds: &Thresholds,
) -> Vec<KeywordDensity> {
    targets
        .iter()
        .map(|keyword| {
            let occurrences = count_word_matches(lower, keyword);
            let density = rate(occurrences, word_count) * 100.0;
            KeywordDensity {
                keyword: keyword.clone(),
                occurrences,
                density,
                within_bounds: density >= thresholds.min_keyword_density
                    && density <= thresholds.max_keyword_density,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "keyword_usage_test.rs"]
mod tests;
