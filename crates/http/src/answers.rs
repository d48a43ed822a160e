//! Answer source backed directly by the upstream text service.
//!
//! Used by the server-rendered page, which runs the widget flow in-process instead of
//! going through `POST /api/ask-ai`.

use async_trait::async_trait;
use faq_desk_core::{
    CandidateEnvelope, ERROR_MESSAGE_PREFIX, LOG_QUERY_PREVIEW_CHARS, UPSTREAM_FAILURE_MESSAGE,
};
use faq_desk_llm::{TextClient, preview};
use faq_desk_widget::{AiAnswer, AnswerSource, interpret_body};

#[derive(Debug, Clone)]
pub struct UpstreamAnswers {
    client: TextClient,
}

impl UpstreamAnswers {
    #[must_use]
    pub const fn new(client: TextClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnswerSource for UpstreamAnswers {
    async fn ask(&self, query: &str) -> AiAnswer {
        tracing::info!("Sending query to text service: {}...", preview(query, LOG_QUERY_PREVIEW_CHARS));
        match self.client.generate(query).await {
            Ok(text) => match serde_json::to_value(CandidateEnvelope::from_text(text)) {
                Ok(body) => interpret_body(&body),
                Err(e) => AiAnswer::Errored(format!("{ERROR_MESSAGE_PREFIX}{e}")),
            },
            Err(e) => {
                tracing::error!(error = %e, "text service request failed");
                AiAnswer::Errored(format!("{ERROR_MESSAGE_PREFIX}{UPSTREAM_FAILURE_MESSAGE}"))
            },
        }
    }
}
