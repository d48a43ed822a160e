use std::time::Duration;

use crate::error::LlmError;
use crate::prompt::{build_prompt, encode_prompt, truncate};

/// Maximum length of an upstream error body kept in [`LlmError::HttpStatus`].
pub const MAX_ERROR_BODY_LEN: usize = 200;

/// Client for the upstream text-generation service.
///
/// The service takes the whole prompt as the URL path of a GET request and answers
/// with a plain-text body.
#[derive(Debug, Clone)]
pub struct TextClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
}

impl TextClient {
    /// Creates a new client for the given base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL the prompt for `query` is sent to.
    #[must_use]
    pub fn prompt_url(&self, query: &str) -> String {
        format!("{}/{}", self.base_url, encode_prompt(&build_prompt(query)))
    }

    /// Ask the upstream service about `query` and return its raw text answer.
    ///
    /// No retries: every failure is terminal for the request.
    ///
    /// # Errors
    /// Returns an error if the query is blank, the request fails, or the service
    /// answers with a non-success status.
    pub async fn generate(&self, query: &str) -> Result<String, LlmError> {
        if query.trim().is_empty() {
            return Err(LlmError::EmptyQuery);
        }

        let response = self.client.get(self.prompt_url(query)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_owned());
            let body = truncate(&body, MAX_ERROR_BODY_LEN).to_owned();
            tracing::debug!(code = status.as_u16(), %body, "text service returned an error status");
            return Err(LlmError::HttpStatus { code: status.as_u16(), body });
        }

        Ok(response.text().await?)
    }
}
