//! Human-readable rendering of results, rubrics and thematic analyses.
//!
//! Every `render_*` function returns the full text so it can be tested; the
//! CLI prints it as is. JSON output bypasses this module entirely.

use crate::config::{CriterionId, ScoringConfig, ValidationReport};
use crate::engine::{AvailableCriterion, ScoringResult, TextStatistics};
use crate::evaluators::CriterionDetails;
use crate::lexical::thematic::ThematicAnalysis;
use crate::report_helpers::{max_width, pad_right, score_cell, separator};

const WIDTH: usize = 66;

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

pub fn render_result(result: &ScoringResult) -> String {
    let sep = separator(WIDTH);
    let name_width = max_width(result.criteria.iter().map(|c| c.name.as_str()), 9);
    let mut lines = vec![
        "SEO Text Score".to_string(),
        sep.clone(),
        format!(
            " Total:    {}  {}",
            score_cell(result.total_score, result.max_score),
            result.grade
        ),
        format!(
            " Rubric:   v{} (revision {}){}",
            result.scoring_version,
            result.config_revision,
            if result.config_valid { "" } else { "  [invalid]" }
        ),
    ];
    if !result.keywords.is_empty() {
        lines.push(format!(" Keywords: {}", result.keywords.join(", ")));
    }
    lines.push(sep.clone());
    lines.push(format!(" {}  {:>6}   Score", pad_right("Criterion", name_width), "Weight"));
    lines.push(sep.clone());
    for c in &result.criteria {
        lines.push(format!(
            " {}  {:>6}   {}",
            pad_right(&c.name, name_width),
            c.weight,
            score_cell(c.score, c.max_score)
        ));
    }
    lines.push(sep.clone());

    let stats = &result.metrics.text_statistics;
    lines.push(format!(
        " Text:     {} words, {} paragraphs, {} sentences",
        stats.word_count, stats.paragraph_count, stats.sentence_count
    ));
    if let Some(line) = topic_line(result) {
        lines.push(line);
    }

    if !result.recommendations.is_empty() {
        lines.push(String::new());
        lines.push(" Recommendations".to_string());
        lines.push(sep);
        for r in &result.recommendations {
            lines.push(format!(" - {} ({}%): {}", r.criterion, r.percentage, r.message));
        }
    }
    lines.join("\n")
}

fn topic_line(result: &ScoringResult) -> Option<String> {
    let CriterionDetails::KeywordUsage(d) = &result.criterion(CriterionId::KeywordUsage)?.details
    else {
        return None;
    };
    let topic = match (&d.topic_analysis.topic, &d.topic_analysis.error) {
        (Some(topic), _) => topic.clone(),
        (None, Some(err)) => format!("unavailable ({err})"),
        (None, None) => "unavailable".to_string(),
    };
    Some(format!(
        " Theme:    {} | topic: {topic}",
        d.thematic.theme_label
    ))
}

pub fn render_config(config: &ScoringConfig) -> String {
    let sep = separator(WIDTH);
    let t = &config.thresholds;
    let mut lines = vec![
        format!("Scoring rubric v{} (revision {})", config.version, config.revision),
        sep.clone(),
        format!(" Total points: {}", config.total_points),
        format!(" Engine enabled: {}", yes_no(config.enabled)),
        sep.clone(),
        format!(" {:<18} {:>6}   {:<7}  Name", "Criterion", "Weight", "Enabled"),
        sep.clone(),
    ];
    for c in &config.criteria {
        lines.push(format!(
            " {:<18} {:>6}   {:<7}  {}",
            c.id.as_str(),
            c.weight,
            yes_no(c.enabled),
            c.name
        ));
    }
    lines.push(sep.clone());
    lines.push(" Grading bands".to_string());
    for band in &config.grading_bands {
        lines.push(format!("   >= {:>3}  {}", band.min_score, band.label));
    }
    lines.push(sep);
    lines.push(format!(
        " Words: {}..{}  Paragraphs: >= {}  Words/paragraph: <= {}",
        t.min_words, t.max_words, t.min_paragraphs, t.max_words_per_paragraph
    ));
    lines.push(format!(
        " Keyword density: {}%..{}%",
        t.min_keyword_density, t.max_keyword_density
    ));
    lines.join("\n")
}

pub fn render_validation(report: &ValidationReport) -> String {
    let mut lines = vec![format!(
        "Configuration {}: enabled weights {} / {} points",
        if report.valid { "valid" } else { "INVALID" },
        report.total_weight,
        report.expected_weight
    )];
    lines.extend(report.errors.iter().map(|e| format!("  error: {e}")));
    lines.extend(report.warnings.iter().map(|w| format!("  warning: {w}")));
    lines.join("\n")
}

pub fn render_criteria(criteria: &[AvailableCriterion]) -> String {
    let sep = separator(WIDTH);
    let mut lines = vec![
        format!(" {:<18} {:>6}   {:<7}  Description", "Criterion", "Weight", "Enabled"),
        sep,
    ];
    for entry in criteria {
        let c = &entry.criterion;
        let mut line = format!(
            " {:<18} {:>6}   {:<7}  {}",
            c.id.as_str(),
            c.weight,
            yes_no(c.enabled),
            c.description
        );
        if !entry.has_evaluator {
            line.push_str("  (no evaluator)");
        }
        lines.push(line);
    }
    lines.join("\n")
}

pub fn render_theme(analysis: &ThematicAnalysis, stats: &TextStatistics) -> String {
    let sep = separator(WIDTH);
    let mut lines = vec![
        format!(
            "Theme: {} ({} keyword matches)",
            analysis.theme_label, analysis.theme_score
        ),
        format!(
            " {} words, {} paragraphs, {:.1} words per paragraph",
            stats.word_count, stats.paragraph_count, stats.average_words_per_paragraph
        ),
        sep.clone(),
    ];
    if analysis.keywords.is_empty() {
        lines.push(" No thematic keywords found".to_string());
    } else {
        let width = max_width(analysis.keywords.iter().map(|k| k.word.as_str()), 7);
        lines.push(format!(" {}  Count", pad_right("Keyword", width)));
        for k in &analysis.keywords {
            lines.push(format!(" {}  {:>5}", pad_right(&k.word, width), k.occurrences));
        }
    }
    lines.push(sep);
    let synonyms: Vec<String> = analysis
        .synonyms
        .iter()
        .map(|s| {
            if s.present {
                format!("{} ✓", s.word)
            } else {
                s.word.clone()
            }
        })
        .collect();
    lines.push(format!(
        " Synonyms ({}/{} used): {}",
        analysis.synonyms_present,
        analysis.synonyms.len(),
        synonyms.join(", ")
    ));
    lines.join("\n")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
