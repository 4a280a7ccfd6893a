use super::*;

/// A paragraph of `len` words, three in ten being "le" and the rest unique.
fn paragraph(len: usize, seed: &mut usize) -> String {
    (0..len)
        .map(|i| {
            if i % 10 < 3 {
                "le".to_string()
            } else {
                *seed += 1;
                format!("terme{seed}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn text_of(paragraphs: usize, words_each: usize) -> String {
    let mut seed = 0;
    (0..paragraphs)
        .map(|_| paragraph(words_each, &mut seed))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn evaluate(text: &str) -> (u32, ReadabilityDetails) {
    let ctx = EvaluationContext::new(text, &[]);
    let result = ReadabilityEvaluator
        .evaluate(&ctx, &ScoringConfig::default())
        .unwrap();
    match result.details {
        CriterionDetails::Readability(d) => (result.score, d),
        other => panic!("unexpected details: {other:?}"),
    }
}

#[test]
fn ideal_text_scores_full_marks() {
    let (score, d) = evaluate(&text_of(4, 60));
    assert!(
        (0.6..=0.8).contains(&d.vocabulary_diversity),
        "diversity {}",
        d.vocabulary_diversity
    );
    assert_eq!(d.structure_level, StructureLevel::Ideal);
    assert_eq!(d.paragraph_count, 4);
    assert_eq!(score, 10);
}

#[test]
fn short_text_is_not_more_readable() {
    let (score, d) = evaluate("Bonjour à tous");
    assert_eq!(d.vocabulary_diversity, 1.0);
    // capped at the low band, single paragraph tier
    assert_eq!(d.density_score, 1);
    assert_eq!(d.structure_level, StructureLevel::SingleParagraph);
    assert_eq!(score, 2);
}

#[test]
fn repetitive_text_has_low_density_score() {
    let (_, d) = evaluate(&"seo ".repeat(100));
    assert!(d.vocabulary_diversity < 0.05);
    assert_eq!(d.density_score, 1);
}

#[test]
fn two_medium_paragraphs_are_good() {
    let (_, d) = evaluate(&text_of(2, 40));
    assert_eq!(d.structure_level, StructureLevel::Good);
    assert_eq!(d.structure_score, 4);
}

#[test]
fn one_huge_paragraph_is_poor() {
    let (_, d) = evaluate(&text_of(1, 300));
    assert_eq!(d.structure_level, StructureLevel::Poor);
    assert_eq!(d.structure_score, 0);
}

#[test]
fn many_tiny_paragraphs_are_fair() {
    let (_, d) = evaluate(&text_of(6, 5));
    assert_eq!(d.structure_level, StructureLevel::Fair);
}

#[test]
fn density_bands_penalise_both_tails() {
    assert_eq!(density_fraction(0.7, 100), 1.0);
    assert_eq!(density_fraction(0.85, 100), 0.8);
    assert_eq!(density_fraction(0.97, 100), 0.4);
    assert_eq!(density_fraction(0.45, 100), 0.6);
    assert_eq!(density_fraction(0.1, 100), LOW_DENSITY_FRACTION);
    assert_eq!(density_fraction(0.7, 10), LOW_DENSITY_FRACTION);
}

#[test]
fn sentence_statistics_are_reported() {
    let (_, d) = evaluate("Une phrase courte. Une autre phrase ici! Et une question?");
    assert_eq!(d.sentence_count, 3);
    assert!((d.avg_sentence_length - 10.0 / 3.0).abs() < 1e-9);
}
