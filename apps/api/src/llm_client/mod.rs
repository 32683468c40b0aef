//! LLM Client, the single point of entry for all OpenRouter calls.
//!
//! No other module may call the chat-completion API directly. Handlers depend on
//! the `ChatCompleter` trait so the gateway can run against a stub in tests.
//!
//! Model: stepfun/step-3.5-flash:free (hardcoded, not configurable)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
/// OpenRouter attributes traffic by these two headers.
const REFERER: &str = "http://localhost:5173";
const APP_TITLE: &str = "Portfolio Chat";
/// Upper bound for one completion call; exceeding it is an upstream failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// The model used for every chat completion.
pub const MODEL: &str = "stepfun/step-3.5-flash:free";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM response had no message content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Content of the first choice's message.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

/// One system + one user message in, the assistant's reply text out.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    async fn complete(&self, api_key: &str, system: &str, user: &str) -> Result<String, LlmError>;
}

/// OpenRouter chat-completions client. No retries: a failed call is reported as-is.
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    endpoint: String,
}

impl OpenRouterClient {
    pub fn new() -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            endpoint: OPENROUTER_URL.to_string(),
        })
    }

    #[cfg(test)]
    fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, LlmError> {
        Ok(Self {
            endpoint: endpoint.into(),
            ..Self::new()?
        })
    }
}

#[async_trait]
impl ChatCompleter for OpenRouterClient {
    async fn complete(&self, api_key: &str, system: &str, user: &str) -> Result<String, LlmError> {
        let request_body = CompletionRequest {
            model: MODEL,
            messages: vec![
                CompletionMessage {
                    role: "system",
                    content: system,
                },
                CompletionMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .header("HTTP-Referer", REFERER)
            .header("X-Title", APP_TITLE)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("OpenRouter returned {}: {}", status, body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)?;
        let reply = parsed.text().ok_or(LlmError::EmptyContent)?.to_string();

        debug!("OpenRouter call succeeded: reply_chars={}", reply.chars().count());

        Ok(reply)
    }
}
