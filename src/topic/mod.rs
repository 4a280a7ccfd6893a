//! Topic detection collaborators.
//!
//! A detector labels the overall topic of a text. The label is explanatory
//! metadata attached to keyword-usage details; it never feeds a score, so a
//! slow, failing or missing detector cannot change a result's numbers.

mod local;
mod remote;

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

pub use local::ThesaurusTopicDetector;
pub use remote::OpenAiTopicDetector;

/// Default upper bound on one detection call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum TopicError {
    #[error("missing credentials: {0}")]
    MissingCredentials(&'static str),
    #[error("text is empty")]
    EmptyText,
    #[error("http error: {0}")]
    Http(String),
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("service returned no topic")]
    EmptyResponse,
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("detector panicked")]
    Panicked,
}

/// Something that can name the topic of a text.
pub trait TopicDetector: Send + Sync {
    /// Short identifier used in result details and logs.
    fn name(&self) -> &'static str;

    fn detect_topic(&self, text: &str) -> Result<String, TopicError>;
}

/// Outcome of a topic detection attempt, as exposed in results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicAnalysis {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detector: Option<&'static str>,
}

impl TopicAnalysis {
    /// Recorded when no detector is wired into the engine.
    pub fn unavailable() -> Self {
        Self {
            success: false,
            topic: None,
            error: Some("no topic detector configured".to_string()),
            detector: None,
        }
    }

    fn from_outcome(detector: &'static str, outcome: Result<String, TopicError>) -> Self {
        match outcome {
            Ok(topic) => Self {
                success: true,
                topic: Some(topic),
                error: None,
                detector: Some(detector),
            },
            Err(err) => Self {
                success: false,
                topic: None,
                error: Some(err.to_string()),
                detector: Some(detector),
            },
        }
    }
}

/// Run `detector` on a worker thread and wait at most `timeout`.
///
/// Errors, timeouts and panics all degrade to an unsuccessful analysis; they
/// are logged here and never propagated. A timed-out worker is left to finish
/// in the background and its late answer is dropped.
pub fn detect_with_timeout(
    detector: Arc<dyn TopicDetector>,
    text: &str,
    timeout: Duration,
) -> TopicAnalysis {
    let name = detector.name();
    let (tx, rx) = mpsc::channel();
    let owned = text.to_string();

    let spawned = thread::Builder::new()
        .name(format!("topic-{name}"))
        .spawn(move || {
            // The receiver may be gone after a timeout; nothing to do then.
            let _ = tx.send(detector.detect_topic(&owned));
        });
    if let Err(err) = spawned {
        warn!(detector = name, error = %err, "could not start topic detection");
        return TopicAnalysis::from_outcome(name, Err(TopicError::Http(err.to_string())));
    }

    let outcome = match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => Err(TopicError::Timeout(timeout)),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(TopicError::Panicked),
    };

    match &outcome {
        Ok(topic) => debug!(detector = name, topic = %topic, "topic detected"),
        Err(err) => warn!(detector = name, error = %err, "topic detection unavailable"),
    }
    TopicAnalysis::from_outcome(name, outcome)
}

/// Build a detector from its CLI/env name: `local`, `openai`, or `none`.
pub fn detector_from_name(name: &str) -> Result<Option<Arc<dyn TopicDetector>>, String> {
    match name.trim().to_ascii_lowercase().as_str() {
        "local" | "thesaurus" => Ok(Some(Arc::new(ThesaurusTopicDetector))),
        "openai" | "remote" => Ok(Some(Arc::new(OpenAiTopicDetector::from_env()))),
        "none" | "off" => Ok(None),
        other => Err(format!(
            "unknown topic detector: {other} (expected local, openai or none)"
        )),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
