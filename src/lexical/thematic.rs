//! Thematic keyword detection against the built-in thesaurus.
//!
//! Theme detection scores each catalog theme by the number of whole-word
//! matches of its canonical keywords. Ties, including the case where nothing
//! matches at all, go to the theme declared first in the catalog, so the
//! outcome is a deterministic function of the text.

use std::collections::HashSet;

use serde::Serialize;

use super::count_word_matches;
use super::thesaurus::{THEMES, Theme, synonyms_of};

/// Cap on thematic keywords reported per text.
pub const MAX_THEMATIC_KEYWORDS: usize = 6;
/// Cap on synonyms suggested per theme.
pub const MAX_SYNONYMS: usize = 6;

/// A term and how often it occurs in the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordOccurrence {
    pub word: String,
    pub occurrences: usize,
    pub present: bool,
}

impl KeywordOccurrence {
    fn count(lower_text: &str, word: &str) -> Self {
        let occurrences = count_word_matches(lower_text, word);
        Self {
            word: word.to_string(),
            occurrences,
            present: occurrences > 0,
        }
    }
}

/// Best-matching theme and its match count.
#[derive(Debug, Clone, Copy)]
pub struct ThemeMatch {
    pub theme: &'static Theme,
    pub score: usize,
}

/// Thematic keywords and synonyms found in a text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThematicAnalysis {
    pub theme: &'static str,
    pub theme_label: &'static str,
    /// Whole-word matches of the theme's canonical keywords.
    pub theme_score: usize,
    pub keywords: Vec<KeywordOccurrence>,
    pub synonyms: Vec<KeywordOccurrence>,
    pub keywords_present: usize,
    pub synonyms_present: usize,
}

/// Detect the dominant theme of `text`.
pub fn detect_theme(text: &str) -> ThemeMatch {
    detect_theme_lower(&text.to_lowercase())
}

fn detect_theme_lower(lower: &str) -> ThemeMatch {
    let mut best = ThemeMatch {
        theme: &THEMES[0],
        score: theme_score(lower, &THEMES[0]),
    };
    for theme in &THEMES[1..] {
        let score = theme_score(lower, theme);
        // strict comparison keeps the earlier theme on ties
        if score > best.score {
            best = ThemeMatch { theme, score };
        }
    }
    best
}

fn theme_score(lower: &str, theme: &Theme) -> usize {
    theme
        .keywords
        .iter()
        .map(|kw| count_word_matches(lower, kw))
        .sum()
}

/// Canonical keywords of `theme` present in `text`, most frequent first,
/// capped at [`MAX_THEMATIC_KEYWORDS`].
pub fn extract_thematic_keywords(text: &str, theme: &Theme) -> Vec<KeywordOccurrence> {
    let lower = text.to_lowercase();
    let mut found: Vec<KeywordOccurrence> = theme
        .keywords
        .iter()
        .map(|kw| KeywordOccurrence::count(&lower, kw))
        .filter(|occ| occ.present)
        .collect();
    // stable sort: equal counts keep catalog order
    found.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
    found.truncate(MAX_THEMATIC_KEYWORDS);
    found
}

/// Distinct synonyms of the theme's keywords, capped at [`MAX_SYNONYMS`].
pub fn generate_synonyms(theme: &Theme) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    theme
        .keywords
        .iter()
        .flat_map(|kw| synonyms_of(kw).iter().copied())
        .filter(|syn| seen.insert(*syn))
        .take(MAX_SYNONYMS)
        .collect()
}

/// Full thematic pass: theme, present keywords, and synonym coverage.
pub fn analyze_thematic_keywords(text: &str) -> ThematicAnalysis {
    let lower = text.to_lowercase();
    let ThemeMatch { theme, score } = detect_theme_lower(&lower);
    let keywords = extract_thematic_keywords(text, theme);
    let synonyms: Vec<KeywordOccurrence> = generate_synonyms(theme)
        .into_iter()
        .map(|syn| KeywordOccurrence::count(&lower, syn))
        .collect();

    ThematicAnalysis {
        theme: theme.id,
        theme_label: theme.label,
        theme_score: score,
        keywords_present: keywords.len(),
        synonyms_present: synonyms.iter().filter(|s| s.present).count(),
        keywords,
        synonyms,
    }
}

#[cfg(test)]
#[path = "thematic_test.rs"]
mod tests;
