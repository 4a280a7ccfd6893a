use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{TopicDetector, TopicError};

const API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Longer texts are cut before being sent.
const MAX_TEXT_CHARS: usize = 4000;

const SYSTEM_PROMPT: &str = "You classify web content. Answer with the main topic \
of the text in two to four words, without punctuation or explanation.";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Remote detector backed by a chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiTopicDetector {
    api_key: Option<String>,
    model: String,
}

impl OpenAiTopicDetector {
    /// Reads `OPENAI_API_KEY` and optionally `OPENAI_MODEL`. A missing key is
    /// reported on first use, not here.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }
}

impl TopicDetector for OpenAiTopicDetector {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn detect_topic(&self, text: &str) -> Result<String, TopicError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(TopicError::MissingCredentials("OPENAI_API_KEY"))?;
        if text.trim().is_empty() {
            return Err(TopicError::EmptyText);
        }

        let sample: String = text.chars().take(MAX_TEXT_CHARS).collect();
        let request = ChatRequest {
            model: &self.model,
            temperature: 0.0,
            max_tokens: 16,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &sample,
                },
            ],
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TopicError::Http(e.to_string()))?;
        let resp = client
            .post(API_URL)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .map_err(|e| TopicError::Http(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(TopicError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response: ChatResponse = resp.json().map_err(|e| TopicError::Http(e.to_string()))?;
        parse_topic(response)
    }
}

fn parse_topic(response: ChatResponse) -> Result<String, TopicError> {
    response
        .choices
        .into_iter()
        .filter_map(|c| c.message.content)
        .map(|c| clean_topic(&c))
        .find(|t| !t.is_empty())
        .ok_or(TopicError::EmptyResponse)
}

/// Strip quotes and trailing punctuation the model sometimes adds.
fn clean_topic(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '.' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;
