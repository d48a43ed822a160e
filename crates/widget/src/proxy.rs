//! Client for the local `POST /api/ask-ai` proxy endpoint.

use async_trait::async_trait;
use faq_desk_core::{ASK_AI_PATH, AskRequest, CandidateEnvelope, ERROR_MESSAGE_PREFIX, NO_ANSWER_MESSAGE};
use serde_json::Value;
use thiserror::Error;

use crate::panel::AiAnswer;

/// Errors reaching or reading the proxy.
#[derive(Debug, Error)]
pub enum ProxyClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Status(String),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid proxy URL: {0}")]
    InvalidUrl(String),
}

/// Anything that can turn a query into an [`AiAnswer`].
#[async_trait]
pub trait AnswerSource: Send + Sync {
    async fn ask(&self, query: &str) -> AiAnswer;
}

/// HTTP client for the faq-desk proxy server.
#[derive(Debug, Clone)]
pub struct AiProxyClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl AiProxyClient {
    /// Client for the proxy served at `base_url`.
    ///
    /// # Errors
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str) -> Result<Self, ProxyClientError> {
        let base = reqwest::Url::parse(base_url)
            .map_err(|e| ProxyClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        let endpoint = base
            .join(ASK_AI_PATH)
            .map_err(|e| ProxyClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self { client: reqwest::Client::new(), endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    /// Send `query` and return the decoded JSON body of a successful response.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success status (carrying the
    /// server's `error` message when it sent one), or a body that is not JSON.
    pub async fn request(&self, query: &str) -> Result<Value, ProxyClientError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&AskRequest { query: query.to_owned() })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), "proxy responded");

        if !status.is_success() {
            let reason = serde_json::from_str::<Value>(&body)
                .ok()
                .as_ref()
                .and_then(error_message)
                .unwrap_or_else(|| {
                    format!("API Error: {}", status.canonical_reason().unwrap_or(status.as_str()))
                });
            return Err(ProxyClientError::Status(reason));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl AnswerSource for AiProxyClient {
    async fn ask(&self, query: &str) -> AiAnswer {
        match self.request(query).await {
            Ok(body) => interpret_body(&body),
            Err(e) => {
                tracing::warn!(error = %e, "AI proxy request failed");
                AiAnswer::Errored(format!("{ERROR_MESSAGE_PREFIX}{e}"))
            },
        }
    }
}

/// Map a successful proxy body to an answer or the no-answer fallback.
#[must_use]
pub fn interpret_body(body: &Value) -> AiAnswer {
    let envelope = serde_json::from_value::<CandidateEnvelope>(body.clone()).unwrap_or_default();
    if let Some(text) = envelope.first_text() {
        return AiAnswer::Answered(text.to_owned());
    }
    tracing::warn!(%body, "no candidates returned");
    let mut message = NO_ANSWER_MESSAGE.to_owned();
    if let Some(feedback) = body.get("promptFeedback") {
        message.push_str(&format!(" (Feedback: {feedback})"));
    }
    AiAnswer::NoAnswer(message)
}

/// `error` as a plain string, or `error.message`.
fn error_message(body: &Value) -> Option<String> {
    let error = body.get("error")?;
    error
        .as_str()
        .or_else(|| error.get("message").and_then(Value::as_str))
        .map(str::to_owned)
}
