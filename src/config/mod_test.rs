use super::*;

#[test]
fn default_weights_sum_to_total_points() {
    let config = ScoringConfig::default();
    assert_eq!(config.enabled_weight(), config.total_points);
    let report = config.validate();
    assert!(report.valid, "default rubric must validate: {:?}", report.errors);
    assert!(report.warnings.is_empty());
    assert_eq!(report.total_weight, 100);
    assert_eq!(report.expected_weight, 100);
}

#[test]
fn default_catalog_follows_declared_order() {
    let config = ScoringConfig::default();
    let ids: Vec<CriterionId> = config.criteria.iter().map(|c| c.id).collect();
    assert_eq!(ids, CriterionId::ALL.to_vec());
}

#[test]
fn default_bands_end_with_catch_all() {
    let config = ScoringConfig::default();
    assert_eq!(config.grading_bands.last().map(|b| b.min_score), Some(0));
}

#[test]
fn criterion_id_parses_snake_and_camel_case() {
    assert_eq!(
        "keyword_usage".parse::<CriterionId>().unwrap(),
        CriterionId::KeywordUsage
    );
    assert_eq!(
        "keywordPosition".parse::<CriterionId>().unwrap(),
        CriterionId::KeywordPosition
    );
    assert_eq!(
        "content-length".parse::<CriterionId>().unwrap(),
        CriterionId::ContentLength
    );
}

#[test]
fn criterion_id_rejects_unknown() {
    let err = "grammar".parse::<CriterionId>().unwrap_err();
    assert!(matches!(err, ScoringError::UnknownCriterion(ref id) if id == "grammar"));
}

#[test]
fn criterion_lookup_fails_when_catalog_entry_removed() {
    let mut config = ScoringConfig::default();
    config.criteria.retain(|c| c.id != CriterionId::Uniqueness);
    assert!(matches!(
        config.criterion(CriterionId::Uniqueness),
        Err(ScoringError::UnknownCriterion(_))
    ));
}

#[test]
fn toggle_reports_change_and_leaves_weights() {
    let mut config = ScoringConfig::default();
    assert!(config.toggle_criterion("uniqueness", false).unwrap());
    assert!(!config.toggle_criterion("uniqueness", false).unwrap());
    let c = config.criterion(CriterionId::Uniqueness).unwrap();
    assert!(!c.enabled);
    assert_eq!(c.weight, 10, "toggling must not rebalance weights");
}

#[test]
fn toggle_unknown_criterion_fails() {
    let mut config = ScoringConfig::default();
    assert!(matches!(
        config.toggle_criterion("seo_magic", true),
        Err(ScoringError::UnknownCriterion(_))
    ));
}

#[test]
fn disabling_makes_weight_mismatch_and_warning() {
    let mut config = ScoringConfig::default();
    config.toggle_criterion("readability", false).unwrap();
    let report = config.validate();
    assert!(!report.valid);
    assert_eq!(report.total_weight, 90);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("90"));
    assert_eq!(report.warnings, vec!["1 criterion(s) disabled".to_string()]);
}

#[test]
fn keyword_usage_only_rubric_is_valid() {
    let mut config = ScoringConfig::default();
    config.total_points = 60;
    for c in config.criteria.iter_mut() {
        if c.id != CriterionId::KeywordUsage {
            c.weight = 0;
            c.enabled = false;
        }
    }
    let report = config.validate();
    assert!(report.valid, "errors: {:?}", report.errors);
    assert_eq!(report.total_weight, 60);
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn missing_catch_all_band_is_an_error() {
    let mut config = ScoringConfig::default();
    config.grading_bands.pop();
    let report = config.validate();
    assert!(!report.valid);
    assert!(report.errors.iter().any(|e| e.contains("catch-all")));
}

#[test]
fn empty_bands_and_zero_points_are_errors() {
    let mut config = ScoringConfig::default();
    config.grading_bands.clear();
    config.total_points = 0;
    for c in config.criteria.iter_mut() {
        c.enabled = false;
    }
    let report = config.validate();
    assert!(!report.valid);
    assert!(report.errors.iter().any(|e| e.contains("no grading bands")));
    assert!(report.errors.iter().any(|e| e.contains("positive")));
}

#[test]
fn unsorted_bands_and_zero_weight_warn() {
    let mut config = ScoringConfig::default();
    config.grading_bands.reverse();
    config.criteria[1].weight = 0;
    config.total_points = 90;
    let report = config.validate();
    assert!(report.valid, "errors: {:?}", report.errors);
    assert!(report.warnings.iter().any(|w| w.contains("descending")));
    assert!(report.warnings.iter().any(|w| w.contains("keyword_position")));
}

#[test]
fn threshold_or_prefers_criterion_value() {
    let config = ScoringConfig::default();
    let position = config.criterion(CriterionId::KeywordPosition).unwrap();
    assert_eq!(position.threshold_or("paragraph_start_chars", 42.0), 100.0);
    assert_eq!(position.threshold_or("missing", 42.0), 42.0);
}
