//! Typed error enum for the LLM crate.

use thiserror::Error;

/// Errors from calls to the upstream text service.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("empty query")]
    EmptyQuery,
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl LlmError {
    /// Whether the upstream was reachable but refused or failed the request.
    #[must_use]
    pub const fn is_upstream_status(&self) -> bool {
        matches!(self, Self::HttpStatus { .. })
    }
}
