use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{AppError, AppResult};

const GROQ_CHAT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
const SYSTEM_PROMPT: &str = "Summarize the following email thread in 3-5 sentences, \
     focusing on the main points and action items.";
const MAX_TOKENS: u32 = 256;
const TEMPERATURE: f32 = 0.5;

/// Client for the Groq OpenAI-compatible chat-completions API.
///
/// Construction is optional on purpose: a missing API key disables
/// summarization and the digest falls back to local excerpts instead of
/// failing the whole run.
#[derive(Debug, Clone)]
pub struct Summarizer {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl Summarizer {
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        let api_key = settings.groq_api_key()?;
        Some(Self {
            http: Client::new(),
            endpoint: GROQ_CHAT_ENDPOINT.to_string(),
            api_key,
            model: settings.summary_model(),
        })
    }

    pub async fn summarize(&self, thread_text: &str) -> AppResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: thread_text.to_string(),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = parse_chat_error(&body).unwrap_or(body);
            return Err(AppError::Summarize(format!(
                "chat completion request failed ({status}): {detail}"
            )));
        }

        let payload: ChatResponse = response.json().await?;
        let summary = payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                AppError::Summarize("chat completion response had no choices".to_string())
            })?;

        Ok(summary)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatErrorEnvelope {
    error: ChatError,
}

#[derive(Debug, Deserialize)]
struct ChatError {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

fn parse_chat_error(body: &str) -> Option<String> {
    let envelope = serde_json::from_str::<ChatErrorEnvelope>(body).ok()?;
    let message = envelope.error.message?;

    match envelope.error.kind {
        Some(kind) => Some(format!("{message} (type={kind})")),
        None => Some(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_an_api_key() {
        // Only meaningful when the environment fallback is absent.
        if std::env::var("GROQ_API_KEY").is_err() {
            assert!(Summarizer::from_settings(&Settings::default()).is_none());
        }

        let settings = Settings {
            groq_api_key: Some("gsk_test".to_string()),
            summary_model: Some("llama-3.3-70b-versatile".to_string()),
            ..Settings::default()
        };
        let summarizer = Summarizer::from_settings(&settings).expect("key configured");
        assert_eq!(summarizer.model, "llama-3.3-70b-versatile");
    }

    #[test]
    fn parses_chat_error_envelope() {
        let detail = parse_chat_error(
            r#"{"error":{"message":"Rate limit reached","type":"tokens"}}"#,
        )
        .expect("error detail");
        assert_eq!(detail, "Rate limit reached (type=tokens)");

        assert_eq!(parse_chat_error("not json"), None);
    }

    #[test]
    fn parses_chat_response_content() {
        let payload: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":" A summary. "}}]}"#,
        )
        .expect("response json");
        assert_eq!(payload.choices[0].message.content.trim(), "A summary.");
    }
}
