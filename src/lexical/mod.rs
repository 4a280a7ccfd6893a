//! Text segmentation and matching primitives shared by every evaluator.
//!
//! All functions are pure. Matching is Unicode-aware: a "word boundary" is
//! any position not flanked by an alphanumeric character, so accented words
//! such as `santé` are matched as whole words.

pub mod thematic;
pub mod thesaurus;
pub mod variations;

use std::collections::HashSet;

/// Length of the excerpt stored alongside a result.
const EXCERPT_CHARS: usize = 100;

/// Whitespace-delimited, non-empty tokens.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn count_words(text: &str) -> usize {
    words(text).len()
}

/// Lowercased alphanumeric tokens with punctuation stripped.
pub fn normalized_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sentences split on terminal punctuation.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Paragraphs separated by one or more blank (or whitespace-only) lines.
pub fn paragraphs(text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                result.push(text[s..end].trim());
            }
        } else {
            start.get_or_insert(line_start);
            end = offset;
        }
    }
    if let Some(s) = start {
        result.push(text[s..end].trim());
    }
    result
}

/// Ratio of distinct to total words (0 when there are no words).
pub fn vocabulary_diversity(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
    unique.len() as f64 / words.len() as f64
}

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Count whole-word (or whole-phrase) occurrences of `needle` in `haystack`.
/// Both sides are expected to be lowercased already.
pub fn count_word_matches(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack
        .match_indices(needle)
        .filter(|(start, _)| {
            let end = start + needle.len();
            let before = haystack[..*start].chars().next_back();
            let after = haystack[end..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
        .count()
}

pub fn contains_word(haystack: &str, needle: &str) -> bool {
    count_word_matches(haystack, needle) > 0
}

/// First `n` characters of `text` (char-safe).
pub fn prefix_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Short excerpt of the analysed text for display and storage.
pub fn excerpt(text: &str) -> String {
    let head = prefix_chars(text, EXCERPT_CHARS);
    if head.len() < text.len() {
        format!("{head}...")
    } else {
        head.to_string()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
