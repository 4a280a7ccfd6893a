//! Long help text constants for CLI subcommands.

/// Scoring: criteria, grading and topic detection.
pub const SCORE: &str = "\
Score a text against the weighted rubric and print the total, the grade,
per-criterion scores and recommendations.

Criteria (built-in weights, 100 points):
  keyword_usage     60  keyword variations and whole-word use, plus the
                        thematic keywords of the text's dominant theme
  keyword_position  10  keywords in the first paragraph and at paragraph starts
  content_length    10  word count, stepped from 50 to 2000 words
  readability       10  vocabulary density and paragraph structure
  uniqueness        10  approximate originality from repeated phrasing

Grades: Excellent >= 85, Very good >= 70, Good >= 55, Average >= 40, Poor.

Paragraphs are separated by blank lines.

The topic detector only labels the text; it never changes a score. The
openai detector reads OPENAI_API_KEY (and optionally OPENAI_MODEL) and
degrades to 'unavailable' on any failure or timeout.

Examples:
  seoscore score article.txt -k seo -k référencement
  cat article.txt | seoscore score -k seo,contenu --json
  seoscore score article.txt -k seo --rubric rubric.toml --disable uniqueness";

/// Validation rules applied to a rubric.
pub const VALIDATE: &str = "\
Check the rubric for consistency.

Errors (the rubric is invalid):
  - the enabled weights do not add up to the total points
  - total points is 0
  - no grading band is defined, or none starts at 0

Warnings:
  - disabled criteria
  - grading bands not declared in descending order
  - enabled criteria with weight 0

Scoring still works with an invalid rubric; results are flagged with
config_valid = false.";
