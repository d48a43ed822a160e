use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;
use std::sync::Arc;

use faq_desk_core::{CandidateEnvelope, LOG_QUERY_PREVIEW_CHARS, QUERY_REQUIRED_MESSAGE};
use faq_desk_llm::preview;

use crate::AppState;
use crate::api_error::ApiError;

/// `POST /api/ask-ai`: forward the query to the text service and wrap its answer.
pub async fn ask_ai(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CandidateEnvelope>, ApiError> {
    let query = payload
        .ok()
        .and_then(|Json(body)| extract_query(&body))
        .ok_or_else(|| ApiError::BadRequest(QUERY_REQUIRED_MESSAGE.to_owned()))?;

    tracing::info!("Sending query to text service: {}...", preview(&query, LOG_QUERY_PREVIEW_CHARS));
    let text = state.text_client.generate(&query).await?;
    Ok(Json(CandidateEnvelope::from_text(text)))
}

/// Non-blank string `query` field of the request body.
fn extract_query(body: &Value) -> Option<String> {
    body.get("query")?.as_str().filter(|q| !q.trim().is_empty()).map(str::to_owned)
}
