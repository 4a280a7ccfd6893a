use super::*;
use crate::topic::TopicError;

const SEO_TEXT: &str = "Le SEO et le référencement naturel demandent une stratégie. \
Le SEO repose sur l'optimisation du contenu, et le contenu doit rester utile. \
Une bonne stratégie SEO améliore la visibilité.";

struct Fixed;

impl TopicDetector for Fixed {
    fn name(&self) -> &'static str {
        "fixed"
    }
    fn detect_topic(&self, _text: &str) -> Result<String, TopicError> {
        Ok("SEO".to_string())
    }
}

struct Broken;

impl TopicDetector for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }
    fn detect_topic(&self, _text: &str) -> Result<String, TopicError> {
        Err(TopicError::MissingCredentials("OPENAI_API_KEY"))
    }
}

fn keywords(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn run(evaluator: &KeywordUsageEvaluator, text: &str, kws: &[&str]) -> (u32, KeywordUsageDetails) {
    let kws = keywords(kws);
    let ctx = EvaluationContext::new(text, &kws);
    let result = evaluator
        .evaluate(&ctx, &ScoringConfig::default())
        .unwrap();
    assert_eq!(result.criterion_id, CriterionId::KeywordUsage);
    assert_eq!(result.max_score, 60);
    match result.details {
        CriterionDetails::KeywordUsage(d) => (result.score, d),
        other => panic!("unexpected details: {other:?}"),
    }
}

#[test]
fn plural_variation_counts_for_declination() {
    let (score, d) = run(
        &KeywordUsageEvaluator::default(),
        "Les chats dorment. Les chats jouent.",
        &["chat"],
    );
    // chat, chats, chàt, chât: "chat" occurs inside "chats", so two of four
    assert_eq!(d.declination.variations_total, 4);
    assert_eq!(d.declination.found, vec!["chat".to_string(), "chats".to_string()]);
    assert_eq!(d.declination.score, 20);
    // but never as a whole word
    assert_eq!(d.correspondence.keywords_found, 1);
    assert_eq!(d.correspondence.exact_matches, 0);
    assert_eq!(d.correspondence.score, 0);
    assert_eq!(score, 20);
}

#[test]
fn declination_counts_keyword_inside_inflected_form() {
    let (_, d) = run(
        &KeywordUsageEvaluator::default(),
        "Les optimisations du site sont nombreuses.",
        &["optimisation"],
    );
    assert!(
        d.declination.found.contains(&"optimisation".to_string()),
        "got {:?}",
        d.declination.found
    );
    assert!(d.declination.found.contains(&"optimisations".to_string()));
    assert_eq!(d.declination.variations_found, 2);
    assert_eq!(d.declination.score, 15);
}

#[test]
fn thematic_keywords_join_user_keywords() {
    let (score, d) = run(&KeywordUsageEvaluator::default(), SEO_TEXT, &["SEO"]);
    assert_eq!(d.thematic.theme, "marketing");
    // seo plus four more marketing terms, all whole words
    assert_eq!(d.correspondence.keywords_found, 5);
    assert_eq!(d.correspondence.exact_matches, 5);
    assert_eq!(d.correspondence.score, 30);
    assert!(d.declination.score > 0);
    assert!(score <= 60);
    assert_eq!(score, d.declination.score + d.correspondence.score);
}

#[test]
fn density_is_reported_against_bounds() {
    let (_, d) = run(&KeywordUsageEvaluator::default(), SEO_TEXT, &["seo", "seo "]);
    assert_eq!(d.density.len(), 1, "duplicate keywords collapse");
    assert_eq!(d.density[0].occurrences, 3);
    assert!(d.density[0].density > 10.0);
    assert!(!d.density[0].within_bounds);
}

#[test]
fn nothing_to_score_gives_zero() {
    let (score, d) = run(&KeywordUsageEvaluator::default(), "lorem ipsum dolor", &[]);
    assert_eq!(score, 0);
    assert_eq!(d.declination.variations_total, 0);
    assert_eq!(d.correspondence.keywords_found, 0);
    assert!(d.density.is_empty());
}

#[test]
fn missing_detector_is_recorded() {
    let (_, d) = run(&KeywordUsageEvaluator::default(), SEO_TEXT, &["seo"]);
    assert!(!d.topic_analysis.success);
    assert_eq!(
        d.topic_analysis.error.as_deref(),
        Some("no topic detector configured")
    );
}

#[test]
fn failing_detector_does_not_change_score() {
    let ok = KeywordUsageEvaluator::with_topic_detector(Arc::new(Fixed), topic::DEFAULT_TIMEOUT);
    let broken = KeywordUsageEvaluator::with_topic_detector(Arc::new(Broken), topic::DEFAULT_TIMEOUT);

    let (ok_score, ok_details) = run(&ok, SEO_TEXT, &["seo"]);
    let (broken_score, broken_details) = run(&broken, SEO_TEXT, &["seo"]);

    assert!(ok_details.topic_analysis.success);
    assert_eq!(ok_details.topic_analysis.topic.as_deref(), Some("SEO"));
    assert!(!broken_details.topic_analysis.success);
    assert_eq!(ok_score, broken_score);
}

#[test]
fn odd_weight_gives_extra_point_to_correspondence() {
    let mut config = ScoringConfig::default();
    config.criteria[0].weight = 61;
    let kws = keywords(&["seo"]);
    let ctx = EvaluationContext::new(SEO_TEXT, &kws);
    let result = KeywordUsageEvaluator::default()
        .evaluate(&ctx, &config)
        .unwrap();
    match result.details {
        CriterionDetails::KeywordUsage(d) => {
            assert_eq!(d.declination.max_score, 30);
            assert_eq!(d.correspondence.max_score, 31);
        }
        other => panic!("unexpected details: {other:?}"),
    }
}
