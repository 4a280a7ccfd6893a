use super::{TopicDetector, TopicError};
use crate::lexical::thematic::detect_theme;

/// Free, offline detector: the label of the best-matching thesaurus theme.
/// Always succeeds for non-empty text.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThesaurusTopicDetector;

impl TopicDetector for ThesaurusTopicDetector {
    fn name(&self) -> &'static str {
        "thesaurus"
    }

    fn detect_topic(&self, text: &str) -> Result<String, TopicError> {
        if text.trim().is_empty() {
            return Err(TopicError::EmptyText);
        }
        Ok(detect_theme(text).theme.label.to_string())
    }
}
