use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use faq_desk_core::QUERY_PARAM;
use faq_desk_widget::{MemoryHistory, SearchController, Url, render_page_html, with_query_param};

use crate::AppState;
use crate::answers::UpstreamAnswers;
use crate::api_error::ApiError;

/// Origin the page location is resolved against. Only path and query matter.
const PAGE_ORIGIN: &str = "http://localhost/";

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub q: String,
}

/// `GET /`: the FAQ page with the `?q=` deep link applied.
///
/// A non-blank `q` filters the list and asks the text service once, so the AI panel
/// arrives already answered.
pub async fn faq_page(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Html<String>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let origin = Url::parse(PAGE_ORIGIN).map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;
    let location = with_query_param(&origin, QUERY_PARAM, Some(&params.q));

    let source = UpstreamAnswers::new(state.text_client.clone());
    let mut controller =
        SearchController::new(Arc::clone(&state.store), MemoryHistory::new(location), source);
    controller.init().await;

    let html =
        render_page_html(&state.title, controller.input(), controller.view(), controller.panel())
            .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;
    Ok(Html(html))
}
