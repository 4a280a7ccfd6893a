//! Lexical variations of a keyword: number (singular/plural) and accents.
//!
//! The linguistic knowledge lives in the tables below; the generator only
//! walks them. Variants are orthographic guesses, not dictionary forms, and
//! are only ever used to look for literal occurrences in a text.

/// Irregular plural endings as (singular suffix, plural suffix), most specific
/// first. A regular `-s` plural is always generated in addition.
static PLURAL_SUFFIXES: &[(&str, &str)] = &[("eau", "eaux"), ("al", "aux"), ("ail", "aux")];

/// Endings that mark a word as already plural.
static PLURAL_MARKERS: &[&str] = &["s", "x"];

/// Accented replacements tried for each base vowel.
static ACCENT_VARIANTS: &[(char, &[char])] = &[
    ('e', &['é', 'è', 'ê']),
    ('a', &['à', 'â']),
    ('i', &['î', 'ï']),
    ('o', &['ô']),
    ('u', &['ù', 'û', 'ü']),
];

/// Accented letters folded back to their base vowel (plus `ç`).
static ACCENT_FOLDS: &[(char, char)] = &[
    ('é', 'e'),
    ('è', 'e'),
    ('ê', 'e'),
    ('ë', 'e'),
    ('à', 'a'),
    ('â', 'a'),
    ('î', 'i'),
    ('ï', 'i'),
    ('ô', 'o'),
    ('ù', 'u'),
    ('û', 'u'),
    ('ü', 'u'),
    ('ç', 'c'),
];

/// Generate the distinct lexical variations of `keyword`, the lowercased
/// keyword itself first. Empty input yields no variations.
pub fn lexical_variations(keyword: &str) -> Vec<String> {
    let base = keyword.trim().to_lowercase();
    if base.is_empty() {
        return Vec::new();
    }

    let mut variations = vec![base.clone()];
    variations.extend(number_variants(&base));
    variations.extend(accent_variants(&base));
    if let Some(folded) = fold_accents(&base) {
        variations.push(folded);
    }

    let mut seen = std::collections::HashSet::new();
    variations.retain(|v| !v.is_empty() && seen.insert(v.clone()));
    variations
}

/// Singular forms of a plural keyword, or plural forms of a singular one.
fn number_variants(word: &str) -> Vec<String> {
    let char_count = word.chars().count();
    if char_count < 2 {
        return Vec::new();
    }

    let looks_plural = PLURAL_MARKERS.iter().any(|m| word.ends_with(*m));
    if looks_plural {
        let mut singulars: Vec<String> = PLURAL_SUFFIXES
            .iter()
            .filter_map(|(singular, plural)| {
                word.strip_suffix(*plural)
                    .filter(|stem| !stem.is_empty())
                    .map(|stem| format!("{stem}{singular}"))
            })
            .take(1)
            .collect();
        if let Some(stem) = word.strip_suffix('s') {
            singulars.push(stem.to_string());
        }
        return singulars;
    }

    let mut plurals = vec![format!("{word}s")];
    if let Some((singular, plural)) = PLURAL_SUFFIXES.iter().find(|(s, _)| word.ends_with(*s)) {
        if let Some(stem) = word.strip_suffix(*singular) {
            plurals.push(format!("{stem}{plural}"));
        }
    }
    // Feminine participles: "optimisée" also shows up as "optimisé".
    if let Some(stem) = word.strip_suffix("ée") {
        plurals.push(format!("{stem}é"));
    }
    plurals
}

/// Replace every occurrence of a base vowel with each of its accented forms.
fn accent_variants(word: &str) -> Vec<String> {
    ACCENT_VARIANTS
        .iter()
        .filter(|(letter, _)| word.contains(*letter))
        .flat_map(|(letter, accents)| {
            accents
                .iter()
                .map(move |accent| word.replace(*letter, &accent.to_string()))
        })
        .collect()
}

/// The keyword with accents removed, if it had any.
pub fn fold_accents(word: &str) -> Option<String> {
    let folded: String = word
        .chars()
        .map(|c| {
            ACCENT_FOLDS
                .iter()
                .find(|(accented, _)| *accented == c)
                .map_or(c, |(_, base)| *base)
        })
        .collect();
    (folded != word).then_some(folded)
}

#[cfg(test)]
#[path = "variations_test.rs"]
mod tests;
