//! Scoring rubric: the criteria catalog, grading bands and shared thresholds.
//!
//! A `ScoringConfig` is a plain value. Runtime changes go through
//! [`ConfigStore`], which swaps whole snapshots so a scoring call always
//! reads one consistent rubric from start to finish.

mod rubric;
mod store;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

pub use store::ConfigStore;

/// Version label stamped on every result produced with the built-in rubric.
pub const DEFAULT_VERSION: &str = "2.3.0";

/// Total points of the built-in rubric.
pub const DEFAULT_TOTAL_POINTS: u32 = 100;

/// Stable identifier of a scoring criterion.
///
/// The set is closed: adding a criterion means adding a variant, its catalog
/// entry and its evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionId {
    KeywordUsage,
    KeywordPosition,
    ContentLength,
    Readability,
    Uniqueness,
}

impl CriterionId {
    /// All criteria in catalog order.
    pub const ALL: [CriterionId; 5] = [
        Self::KeywordUsage,
        Self::KeywordPosition,
        Self::ContentLength,
        Self::Readability,
        Self::Uniqueness,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeywordUsage => "keyword_usage",
            Self::KeywordPosition => "keyword_position",
            Self::ContentLength => "content_length",
            Self::Readability => "readability",
            Self::Uniqueness => "uniqueness",
        }
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriterionId {
    type Err = ScoringError;

    /// Accepts the snake_case id as well as the camelCase catalog key
    /// (`keywordUsage`), ignoring ASCII case and `-`/`_` separators.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let folded: String = value
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().replace('_', "") == folded)
            .ok_or_else(|| ScoringError::UnknownCriterion(value.to_string()))
    }
}

/// One independently weighted scoring dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
    /// Points contributed when enabled.
    pub weight: u32,
    pub enabled: bool,
    pub description: String,
    /// Criterion-specific numeric bounds (open map).
    pub thresholds: BTreeMap<String, f64>,
}

impl Criterion {
    fn new(id: CriterionId, name: &str, weight: u32, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            weight,
            enabled: true,
            description: description.to_string(),
            thresholds: BTreeMap::new(),
        }
    }

    fn with_threshold(mut self, key: &str, value: f64) -> Self {
        self.thresholds.insert(key.to_string(), value);
        self
    }

    /// Criterion-specific threshold, falling back to `default` when unset.
    pub fn threshold_or(&self, key: &str, default: f64) -> f64 {
        self.thresholds.get(key).copied().unwrap_or(default)
    }
}

/// Maps a minimum total score to a qualitative label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingBand {
    pub min_score: u32,
    pub label: String,
}

impl GradingBand {
    fn new(min_score: u32, label: &str) -> Self {
        Self {
            min_score,
            label: label.to_string(),
        }
    }
}

/// Numeric defaults shared by several evaluators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub min_words: usize,
    pub max_words: usize,
    pub min_paragraphs: usize,
    pub max_words_per_paragraph: usize,
    /// Keyword density bounds, in percent of total words.
    pub min_keyword_density: f64,
    pub max_keyword_density: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_words: 50,
            max_words: 2000,
            min_paragraphs: 2,
            max_words_per_paragraph: 200,
            min_keyword_density: 0.5,
            max_keyword_density: 3.0,
        }
    }
}

/// The complete rubric used for one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringConfig {
    pub version: String,
    /// Incremented on every administrative change.
    pub revision: u64,
    pub total_points: u32,
    /// Global kill switch.
    pub enabled: bool,
    /// Criteria in catalog order.
    pub criteria: Vec<Criterion>,
    pub grading_bands: Vec<GradingBand>,
    pub thresholds: Thresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            revision: 0,
            total_points: DEFAULT_TOTAL_POINTS,
            enabled: true,
            criteria: default_catalog(),
            grading_bands: vec![
                GradingBand::new(85, "Excellent"),
                GradingBand::new(70, "Very good"),
                GradingBand::new(55, "Good"),
                GradingBand::new(40, "Average"),
                GradingBand::new(0, "Poor"),
            ],
            thresholds: Thresholds::default(),
        }
    }
}

fn default_catalog() -> Vec<Criterion> {
    vec![
        Criterion::new(
            CriterionId::KeywordUsage,
            "Keyword usage",
            60,
            "Use of target keywords and their lexical field",
        ),
        Criterion::new(
            CriterionId::KeywordPosition,
            "Keyword position",
            10,
            "Placement of keywords in the first paragraph and at paragraph starts",
        )
        .with_threshold("paragraph_start_chars", 100.0),
        Criterion::new(
            CriterionId::ContentLength,
            "Content length",
            10,
            "Length of the content in words",
        ),
        Criterion::new(
            CriterionId::Readability,
            "Readability",
            10,
            "Vocabulary density and paragraph structure",
        )
        .with_threshold("ideal_paragraphs", 4.0)
        .with_threshold("ideal_min_paragraph_words", 50.0),
        Criterion::new(
            CriterionId::Uniqueness,
            "Originality",
            10,
            "Approximate originality from repeated phrasing",
        ),
    ]
}

/// Outcome of [`ScoringConfig::validate`]. Never an error by itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub total_weight: u32,
    pub expected_weight: u32,
}

impl ScoringConfig {
    /// Look up a criterion by id.
    pub fn criterion(&self, id: CriterionId) -> Result<&Criterion, ScoringError> {
        self.criteria
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ScoringError::UnknownCriterion(id.to_string()))
    }

    fn criterion_mut(&mut self, id: CriterionId) -> Result<&mut Criterion, ScoringError> {
        self.criteria
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ScoringError::UnknownCriterion(id.to_string()))
    }

    /// Enable or disable a criterion in place. Weights are left untouched;
    /// callers re-run [`validate`](Self::validate) to see the consequences.
    /// Returns whether the flag actually changed.
    pub fn toggle_criterion(&mut self, id: &str, enabled: bool) -> Result<bool, ScoringError> {
        let id: CriterionId = id.parse()?;
        let criterion = self.criterion_mut(id)?;
        let changed = criterion.enabled != enabled;
        criterion.enabled = enabled;
        Ok(changed)
    }

    /// Enabled criteria in catalog order.
    pub fn enabled_criteria(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter().filter(|c| c.enabled)
    }

    /// Sum of the weights of enabled criteria.
    pub fn enabled_weight(&self) -> u32 {
        self.enabled_criteria().map(|c| c.weight).sum()
    }

    /// Read-only consistency check of the rubric.
    pub fn validate(&self) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let total_weight = self.enabled_weight();
        if total_weight != self.total_points {
            errors.push(format!(
                "sum of enabled weights ({total_weight}) does not match total points ({})",
                self.total_points
            ));
        }
        if self.total_points == 0 {
            errors.push("total points must be positive".to_string());
        }

        match self.grading_bands.iter().map(|b| b.min_score).min() {
            None => errors.push("no grading bands defined".to_string()),
            Some(lowest) if lowest != 0 => errors.push(format!(
                "lowest grading band starts at {lowest}; a catch-all band at 0 is required"
            )),
            Some(_) => {}
        }
        if self
            .grading_bands
            .windows(2)
            .any(|w| w[0].min_score < w[1].min_score)
        {
            warnings.push("grading bands are not declared in descending order".to_string());
        }

        let disabled = self.criteria.iter().filter(|c| !c.enabled).count();
        if disabled > 0 {
            warnings.push(format!("{disabled} criterion(s) disabled"));
        }
        for c in self.enabled_criteria().filter(|c| c.weight == 0) {
            warnings.push(format!("criterion {} is enabled with weight 0", c.id));
        }

        ValidationReport {
            valid: errors.is_empty(),
            errors,
            warnings,
            total_weight,
            expected_weight: self.total_points,
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
