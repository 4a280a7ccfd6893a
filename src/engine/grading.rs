use crate::config::GradingBand;

/// Label used when a rubric defines no bands at all.
pub const UNRATED: &str = "Unrated";

/// Label of the highest band whose minimum is at or below `total`.
///
/// Bands are considered in descending `min_score` order whatever their
/// declaration order. A valid rubric always has a catch-all band at 0; if it
/// does not, the lowest band's label is used.
pub fn grade_for(total: u32, bands: &[GradingBand]) -> String {
    let mut ordered: Vec<&GradingBand> = bands.iter().collect();
    ordered.sort_by(|a, b| b.min_score.cmp(&a.min_score));
    ordered
        .iter()
        .find(|band| band.min_score <= total)
        .or_else(|| ordered.last())
        .map_or_else(|| UNRATED.to_string(), |band| band.label.clone())
}

#[cfg(test)]
#[path = "grading_test.rs"]
mod tests;
