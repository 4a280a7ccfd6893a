//! Scoring orchestration.
//!
//! The engine holds the active rubric in a [`ConfigStore`] and a set of
//! evaluators. Each call reads one config snapshot, runs the enabled
//! evaluators in parallel, then aggregates, grades, and explains. Any
//! evaluator failure aborts the call: there are no partial scores.

mod grading;
mod metrics;
mod recommendations;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use tracing::{debug, info, warn};

use crate::config::{ConfigStore, Criterion, CriterionId, ScoringConfig, ValidationReport};
use crate::error::ScoringError;
use crate::evaluators::{
    CriterionDetails, EvaluationContext, Evaluator, KeywordUsageEvaluator, SubScoreResult,
    default_evaluators,
};
use crate::lexical::excerpt;
use crate::topic::TopicDetector;

pub use grading::grade_for;
pub use metrics::{Metrics, TextStatistics, text_statistics};
pub use recommendations::Recommendation;

/// One criterion's entry in a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionResult {
    pub id: CriterionId,
    pub name: String,
    pub weight: u32,
    pub score: u32,
    pub max_score: u32,
    pub details: CriterionDetails,
}

/// Everything produced by one scoring call. Built fresh each time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    pub excerpt: String,
    pub keywords: Vec<String>,
    pub scoring_version: String,
    /// Revision of the config snapshot used.
    pub config_revision: u64,
    pub config_valid: bool,
    pub total_score: u32,
    pub max_score: u32,
    pub grade: String,
    /// Enabled criteria, in catalog order. Serialized as a map keyed by
    /// criterion id.
    #[serde(serialize_with = "criteria_by_id")]
    pub criteria: Vec<CriterionResult>,
    pub recommendations: Vec<Recommendation>,
    pub metrics: Metrics,
    pub timestamp: DateTime<Utc>,
}

impl ScoringResult {
    pub fn criterion(&self, id: CriterionId) -> Option<&CriterionResult> {
        self.criteria.iter().find(|c| c.id == id)
    }
}

fn criteria_by_id<S: Serializer>(
    criteria: &[CriterionResult],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(criteria.iter().map(|c| (c.id.as_str(), c)))
}

/// A catalog entry and whether an evaluator is registered for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailableCriterion {
    #[serde(flatten)]
    pub criterion: Criterion,
    pub has_evaluator: bool,
}

pub struct ScoringEngine {
    store: ConfigStore,
    evaluators: Vec<Box<dyn Evaluator>>,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ScoringEngine {
    /// Engine with the built-in evaluators and no topic detector.
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            store: ConfigStore::new(config),
            evaluators: default_evaluators(),
        }
    }

    /// Let keyword usage consult `detector`, waiting at most `timeout`.
    pub fn with_topic_detector(mut self, detector: Arc<dyn TopicDetector>, timeout: Duration) -> Self {
        self.add_evaluator(Box::new(KeywordUsageEvaluator::with_topic_detector(
            detector, timeout,
        )));
        self
    }

    /// Register an evaluator, replacing any existing one for the same criterion.
    pub fn add_evaluator(&mut self, evaluator: Box<dyn Evaluator>) {
        let id = evaluator.criterion_id();
        match self.evaluators.iter_mut().find(|e| e.criterion_id() == id) {
            Some(slot) => *slot = evaluator,
            None => self.evaluators.push(evaluator),
        }
    }

    fn evaluator_for(&self, id: CriterionId) -> Option<&dyn Evaluator> {
        self.evaluators
            .iter()
            .find(|e| e.criterion_id() == id)
            .map(|e| e.as_ref())
    }

    /// Score `text` against the active rubric.
    pub fn evaluate(&self, text: &str, keywords: &[String]) -> Result<ScoringResult, ScoringError> {
        let config = self.store.snapshot();
        if !config.enabled {
            return Err(ScoringError::EngineDisabled);
        }
        if text.trim().is_empty() {
            return Err(ScoringError::InvalidInput);
        }

        let report = config.validate();
        if !report.valid {
            warn!(errors = ?report.errors, "scoring with an invalid configuration");
        }

        let mut active = Vec::new();
        for criterion in &config.criteria {
            match self.evaluator_for(criterion.id) {
                Some(evaluator) if evaluator.is_enabled(&config) => {
                    active.push((criterion, evaluator))
                }
                Some(_) => {}
                None if criterion.enabled => {
                    warn!(criterion = %criterion.id, "no evaluator registered, criterion skipped")
                }
                None => {}
            }
        }

        let ctx = EvaluationContext::new(text, keywords);
        let sub_scores = run_evaluators(&active, &ctx, &config)?;

        let criteria: Vec<CriterionResult> = active
            .iter()
            .zip(&sub_scores)
            .map(|((criterion, _), sub)| CriterionResult {
                id: criterion.id,
                name: criterion.name.clone(),
                weight: criterion.weight,
                score: sub.score,
                max_score: sub.max_score,
                details: sub.details.clone(),
            })
            .collect();

        let total_score: u32 = sub_scores.iter().map(|s| s.score).sum();
        let grade = grade_for(total_score, &config.grading_bands);
        let recommendations = recommendations::build(&sub_scores, &config);
        let metrics = metrics::compute(text, &sub_scores, &config);

        info!(
            total = total_score,
            max = config.total_points,
            grade = %grade,
            revision = config.revision,
            criteria = criteria.len(),
            "text scored"
        );

        Ok(ScoringResult {
            excerpt: excerpt(text),
            keywords: keywords.to_vec(),
            scoring_version: config.version.clone(),
            config_revision: config.revision,
            config_valid: report.valid,
            total_score,
            max_score: config.total_points,
            grade,
            criteria,
            recommendations,
            metrics,
            timestamp: Utc::now(),
        })
    }

    /// The rubric in force right now.
    pub fn configuration(&self) -> Arc<ScoringConfig> {
        self.store.snapshot()
    }

    pub fn validate_configuration(&self) -> ValidationReport {
        self.store.validate()
    }

    /// Enable or disable a criterion for subsequent calls. Calls already in
    /// flight keep the snapshot they started with.
    pub fn toggle_criterion(&self, id: &str, enabled: bool) -> Result<bool, ScoringError> {
        self.store.toggle_criterion(id, enabled)
    }

    /// Every catalog criterion, enabled or not, in catalog order.
    pub fn available_criteria(&self) -> Vec<AvailableCriterion> {
        self.store
            .criteria()
            .into_iter()
            .map(|criterion| AvailableCriterion {
                has_evaluator: self.evaluator_for(criterion.id).is_some(),
                criterion,
            })
            .collect()
    }
}

/// Run every evaluator on its own scoped thread and collect results in
/// input order. All threads are joined before the first failure is returned.
fn run_evaluators(
    active: &[(&Criterion, &dyn Evaluator)],
    ctx: &EvaluationContext<'_>,
    config: &ScoringConfig,
) -> Result<Vec<SubScoreResult>, ScoringError> {
    let joined: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = active
            .iter()
            .map(|(criterion, evaluator)| {
                let id = criterion.id;
                let handle = scope.spawn(move || evaluator.evaluate(ctx, config));
                (id, handle)
            })
            .collect();
        handles
            .into_iter()
            .map(|(id, handle)| (id, handle.join()))
            .collect()
    });

    joined
        .into_iter()
        .map(|(id, outcome)| match outcome {
            Ok(Ok(sub)) => {
                debug!(criterion = %id, score = sub.score, max = sub.max_score, "criterion scored");
                Ok(sub)
            }
            Ok(Err(err)) => Err(err),
            Err(_) => Err(ScoringError::Evaluator {
                criterion: id,
                message: "evaluator panicked".to_string(),
            }),
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
