use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Left-align `s` in a column of `width` terminal cells. Accented and wide
/// characters are measured by display width, not bytes.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// Widest display width among `items`, at least `min`.
pub fn max_width<'a>(items: impl Iterator<Item = &'a str>, min: usize) -> usize {
    items.map(UnicodeWidthStr::width).max().unwrap_or(min).max(min)
}

/// `score/max` with a percentage, e.g. `42/60 (70%)`.
pub fn score_cell(score: u32, max: u32) -> String {
    if max == 0 {
        format!("{score}/{max}")
    } else {
        format!("{score}/{max} ({:.0}%)", score as f64 * 100.0 / max as f64)
    }
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
