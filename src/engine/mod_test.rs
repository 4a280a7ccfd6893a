use super::*;
use crate::topic::{TopicAnalysis, TopicError};

const ARTICLE: &str = "Le SEO est une discipline du marketing digital. Une stratégie SEO \
solide améliore la visibilité d'un site et attire un trafic qualifié grâce au référencement \
naturel et à un contenu utile pour les lecteurs.

Le contenu reste au coeur du référencement. Un bon article répond à une intention précise, \
structure ses idées en paragraphes courts et emploie un vocabulaire varié autour de ses \
mots clés principaux sans les répéter mécaniquement.

L'optimisation technique complète ce travail éditorial. Les pages rapides, les balises bien \
renseignées et les liens internes cohérents aident les moteurs à comprendre chaque page et \
à la classer correctement dans leurs résultats.

Enfin, la communication autour des contenus publiés prolonge leur portée. Partager les \
articles, suivre les performances et ajuster la stratégie permet de progresser durablement \
dans les résultats de recherche.";

fn kws(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

struct Stub(Result<&'static str, ()>);

impl TopicDetector for Stub {
    fn name(&self) -> &'static str {
        "stub"
    }
    fn detect_topic(&self, _text: &str) -> Result<String, TopicError> {
        match self.0 {
            Ok(topic) => Ok(topic.to_string()),
            Err(()) => Err(TopicError::Http("connection refused".to_string())),
        }
    }
}

struct Hanging;

impl TopicDetector for Hanging {
    fn name(&self) -> &'static str {
        "hanging"
    }
    fn detect_topic(&self, _text: &str) -> Result<String, TopicError> {
        thread::sleep(Duration::from_millis(400));
        Ok("late".to_string())
    }
}

struct Exploding;

impl Evaluator for Exploding {
    fn criterion_id(&self) -> CriterionId {
        CriterionId::Uniqueness
    }
    fn evaluate(
        &self,
        _ctx: &EvaluationContext<'_>,
        _config: &ScoringConfig,
    ) -> Result<SubScoreResult, ScoringError> {
        panic!("evaluator bug")
    }
}

struct Refusing;

impl Evaluator for Refusing {
    fn criterion_id(&self) -> CriterionId {
        CriterionId::Readability
    }
    fn evaluate(
        &self,
        _ctx: &EvaluationContext<'_>,
        _config: &ScoringConfig,
    ) -> Result<SubScoreResult, ScoringError> {
        Err(ScoringError::Evaluator {
            criterion: CriterionId::Readability,
            message: "refused".to_string(),
        })
    }
}

fn topic_of(result: &ScoringResult) -> &TopicAnalysis {
    match &result.criterion(CriterionId::KeywordUsage).unwrap().details {
        CriterionDetails::KeywordUsage(d) => &d.topic_analysis,
        other => panic!("unexpected details: {other:?}"),
    }
}

#[test]
fn empty_text_is_invalid_input() {
    let engine = ScoringEngine::default();
    assert!(matches!(engine.evaluate("", &[]), Err(ScoringError::InvalidInput)));
    assert!(matches!(
        engine.evaluate("  \n\t ", &kws(&["seo"])),
        Err(ScoringError::InvalidInput)
    ));
}

#[test]
fn disabled_engine_refuses_to_score() {
    let config = ScoringConfig {
        enabled: false,
        ..ScoringConfig::default()
    };
    let engine = ScoringEngine::new(config);
    assert!(matches!(
        engine.evaluate(ARTICLE, &[]),
        Err(ScoringError::EngineDisabled)
    ));
}

#[test]
fn full_result_is_consistent() {
    let engine = ScoringEngine::default();
    let result = engine.evaluate(ARTICLE, &kws(&["seo", "contenu"])).unwrap();

    assert_eq!(result.criteria.len(), 5);
    let ids: Vec<CriterionId> = result.criteria.iter().map(|c| c.id).collect();
    assert_eq!(ids, CriterionId::ALL.to_vec(), "catalog order");
    for c in &result.criteria {
        assert!(c.score <= c.max_score, "{} out of bounds", c.id);
        assert_eq!(c.max_score, c.weight);
    }
    let sum: u32 = result.criteria.iter().map(|c| c.score).sum();
    assert_eq!(result.total_score, sum);
    assert!(result.total_score <= result.max_score);
    assert_eq!(result.max_score, 100);
    assert_eq!(result.grade, grade_for(result.total_score, &engine.configuration().grading_bands));
    assert!(result.config_valid);
    assert_eq!(result.scoring_version, "2.3.0");
    assert!(result.excerpt.ends_with("..."));
    assert_eq!(result.metrics.text_statistics.paragraph_count, 4);
    assert_eq!(result.metrics.score_distribution.len(), 5);
}

#[test]
fn recommendations_match_weak_criteria() {
    let engine = ScoringEngine::default();
    let result = engine.evaluate("Texte très court.", &kws(&["seo"])).unwrap();
    let weak: Vec<CriterionId> = result
        .criteria
        .iter()
        .filter(|c| (c.score as f64) < 0.7 * c.max_score as f64)
        .map(|c| c.id)
        .collect();
    let recommended: Vec<CriterionId> = result
        .recommendations
        .iter()
        .map(|r| r.criterion_id)
        .collect();
    assert_eq!(recommended, weak);
    assert!(recommended.contains(&CriterionId::ContentLength));
    assert!(result.metrics.global_performance.needs_improvement >= 1);
}

#[test]
fn scenario_first_paragraph_keyword() {
    let mut n = 0;
    let mut paras = Vec::new();
    for p in 0..5 {
        let mut words: Vec<String> = (0..100)
            .map(|_| {
                n += 1;
                format!("mot{n}")
            })
            .collect();
        if p == 0 {
            for i in 0..5 {
                words[i * 20 + 1] = "seo".to_string();
            }
        }
        paras.push(words.join(" "));
    }
    let text = paras.join("\n\n");

    let result = ScoringEngine::default()
        .evaluate(&text, &kws(&["seo"]))
        .unwrap();
    match &result.criterion(CriterionId::KeywordPosition).unwrap().details {
        CriterionDetails::KeywordPosition(d) => {
            assert_eq!(d.first_paragraph_score, d.first_paragraph_max);
            assert_eq!(d.paragraphs_starting_with_keyword, 1);
            assert!(d.paragraph_start_score < d.paragraph_start_max);
        }
        other => panic!("unexpected details: {other:?}"),
    }
}

#[test]
fn scenario_usage_only_rubric() {
    let mut config = ScoringConfig {
        total_points: 60,
        ..ScoringConfig::default()
    };
    for id in ["keyword_position", "content_length", "readability", "uniqueness"] {
        config.toggle_criterion(id, false).unwrap();
    }
    let report = config.validate();
    assert!(report.valid, "errors: {:?}", report.errors);

    let engine = ScoringEngine::new(config);
    let result = engine.evaluate(ARTICLE, &kws(&["seo"])).unwrap();
    assert_eq!(result.max_score, 60);
    assert_eq!(result.criteria.len(), 1);
    assert!(result.total_score <= 60);
}

#[test]
fn scenario_plural_declination() {
    let result = ScoringEngine::default()
        .evaluate("Les chats de la maison dorment au soleil.", &kws(&["chat"]))
        .unwrap();
    match &result.criterion(CriterionId::KeywordUsage).unwrap().details {
        CriterionDetails::KeywordUsage(d) => {
            assert!(d.declination.found.contains(&"chats".to_string()));
            assert!(d.declination.score > 0);
        }
        other => panic!("unexpected details: {other:?}"),
    }
}

#[test]
fn scenario_topic_failure_keeps_scores() {
    let ok = ScoringEngine::default()
        .with_topic_detector(Arc::new(Stub(Ok("SEO"))), Duration::from_secs(2));
    let failing = ScoringEngine::default()
        .with_topic_detector(Arc::new(Stub(Err(()))), Duration::from_secs(2));
    let slow = ScoringEngine::default()
        .with_topic_detector(Arc::new(Hanging), Duration::from_millis(20));

    let keywords = kws(&["seo"]);
    let a = ok.evaluate(ARTICLE, &keywords).unwrap();
    let b = failing.evaluate(ARTICLE, &keywords).unwrap();
    let c = slow.evaluate(ARTICLE, &keywords).unwrap();

    assert!(topic_of(&a).success);
    assert!(!topic_of(&b).success);
    assert!(!topic_of(&c).success);
    assert_eq!(a.total_score, b.total_score);
    assert_eq!(a.total_score, c.total_score);
    assert_eq!(b.criteria.len(), 5);
}

#[test]
fn scores_are_deterministic() {
    let engine = ScoringEngine::default()
        .with_topic_detector(Arc::new(Stub(Ok("SEO"))), Duration::from_secs(2));
    let keywords = kws(&["seo", "référencement"]);
    let mut a = engine.evaluate(ARTICLE, &keywords).unwrap();
    let b = engine.evaluate(ARTICLE, &keywords).unwrap();
    a.timestamp = b.timestamp;
    assert_eq!(a, b);
}

#[test]
fn disabling_removes_criterion_and_warns() {
    let engine = ScoringEngine::default();
    let before = engine.evaluate(ARTICLE, &kws(&["seo"])).unwrap();

    assert!(engine.toggle_criterion("uniqueness", false).unwrap());
    let after = engine.evaluate(ARTICLE, &kws(&["seo"])).unwrap();

    assert!(after.criterion(CriterionId::Uniqueness).is_none());
    assert_eq!(after.criteria.len(), 4);
    let removed = before.criterion(CriterionId::Uniqueness).unwrap().score;
    assert_eq!(after.total_score, before.total_score - removed);
    assert!(!after.config_valid);
    assert_eq!(after.config_revision, before.config_revision + 1);

    let report = engine.validate_configuration();
    assert!(!report.valid);
    assert!(report.warnings.iter().any(|w| w.contains("disabled")));
}

#[test]
fn unknown_criterion_toggle_fails() {
    let engine = ScoringEngine::default();
    assert!(matches!(
        engine.toggle_criterion("sentiment", false),
        Err(ScoringError::UnknownCriterion(_))
    ));
}

#[test]
fn panicking_evaluator_aborts_the_call() {
    let mut engine = ScoringEngine::default();
    engine.add_evaluator(Box::new(Exploding));
    let err = engine.evaluate(ARTICLE, &[]).unwrap_err();
    assert!(matches!(
        err,
        ScoringError::Evaluator {
            criterion: CriterionId::Uniqueness,
            ..
        }
    ));
}

#[test]
fn failing_evaluator_aborts_the_call() {
    let mut engine = ScoringEngine::default();
    engine.add_evaluator(Box::new(Refusing));
    assert!(matches!(
        engine.evaluate(ARTICLE, &[]),
        Err(ScoringError::Evaluator { .. })
    ));
}

#[test]
fn disabled_failing_evaluator_is_not_run() {
    let mut engine = ScoringEngine::default();
    engine.add_evaluator(Box::new(Refusing));
    engine.toggle_criterion("readability", false).unwrap();
    assert!(engine.evaluate(ARTICLE, &[]).is_ok());
}

#[test]
fn available_criteria_lists_everything() {
    let engine = ScoringEngine::default();
    engine.toggle_criterion("content_length", false).unwrap();
    let all = engine.available_criteria();
    assert_eq!(all.len(), 5);
    assert!(all.iter().all(|c| c.has_evaluator));
    let length = all
        .iter()
        .find(|c| c.criterion.id == CriterionId::ContentLength)
        .unwrap();
    assert!(!length.criterion.enabled);
}

#[test]
fn result_serializes_with_snake_case_ids() {
    let result = ScoringEngine::default()
        .evaluate(ARTICLE, &kws(&["seo"]))
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["criteria"].is_object());
    assert_eq!(json["criteria"]["keyword_usage"]["id"], "keyword_usage");
    assert_eq!(
        json.pointer("/criteria/keyword_usage/details/topic_analysis/success"),
        Some(&serde_json::Value::Bool(false))
    );
    assert_eq!(json["criteria"]["uniqueness"]["max_score"], 10);
    assert!(json["timestamp"].is_string());

    // printed output keeps catalog order
    let text = serde_json::to_string(&result).unwrap();
    let usage = text.find("\"keyword_usage\":{").unwrap();
    let uniqueness = text.find("\"uniqueness\":{").unwrap();
    assert!(usage < uniqueness);
}
