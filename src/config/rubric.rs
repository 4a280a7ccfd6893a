//! TOML rubric overlays.
//!
//! A rubric file only lists what differs from the built-in catalog:
//!
//! ```toml
//! version = "2.4.0-experiment"
//! total_points = 100
//!
//! [thresholds]
//! min_words = 300
//!
//! [criteria.keyword_usage]
//! weight = 50
//!
//! [criteria.readability]
//! weight = 20
//! thresholds = { ideal_paragraphs = 5 }
//!
//! [[grading_bands]]
//! min_score = 80
//! label = "Excellent"
//!
//! [[grading_bands]]
//! min_score = 0
//! label = "Needs work"
//! ```
//!
//! Grading bands, when present, replace the built-in list as a whole.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{CriterionId, GradingBand, ScoringConfig, Thresholds};
use crate::error::ScoringError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RubricFile {
    version: Option<String>,
    total_points: Option<u32>,
    enabled: Option<bool>,
    thresholds: Option<Thresholds>,
    grading_bands: Option<Vec<GradingBand>>,
    #[serde(default)]
    criteria: BTreeMap<String, CriterionOverride>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CriterionOverride {
    name: Option<String>,
    weight: Option<u32>,
    enabled: Option<bool>,
    description: Option<String>,
    #[serde(default)]
    thresholds: BTreeMap<String, f64>,
}

impl ScoringConfig {
    /// Build a config from the built-in catalog overlaid with a TOML rubric.
    pub fn from_toml_str(source: &str) -> Result<Self, ScoringError> {
        let rubric: RubricFile = toml::from_str(source)?;
        let mut config = ScoringConfig::default();
        config.apply(rubric)?;
        Ok(config)
    }

    /// Read and apply a rubric file.
    pub fn load(path: &Path) -> Result<Self, ScoringError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
            .map_err(|e| match e {
                ScoringError::Rubric(msg) => {
                    ScoringError::Rubric(format!("{}: {msg}", path.display()))
                }
                other => other,
            })
    }

    fn apply(&mut self, rubric: RubricFile) -> Result<(), ScoringError> {
        if let Some(version) = rubric.version {
            self.version = version;
        }
        if let Some(total_points) = rubric.total_points {
            self.total_points = total_points;
        }
        if let Some(enabled) = rubric.enabled {
            self.enabled = enabled;
        }
        if let Some(thresholds) = rubric.thresholds {
            self.thresholds = thresholds;
        }
        if let Some(bands) = rubric.grading_bands {
            self.grading_bands = bands;
        }

        for (key, patch) in rubric.criteria {
            let id: CriterionId = key.parse()?;
            let criterion = self.criterion_mut(id)?;
            if let Some(name) = patch.name {
                criterion.name = name;
            }
            if let Some(weight) = patch.weight {
                criterion.weight = weight;
            }
            if let Some(enabled) = patch.enabled {
                criterion.enabled = enabled;
            }
            if let Some(description) = patch.description {
                criterion.description = description;
            }
            criterion.thresholds.extend(patch.thresholds);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "rubric_test.rs"]
mod tests;
