use anyhow::Result;
use faq_desk_http::{AppState, ServerConfig, create_router, shutdown_signal};
use faq_desk_llm::TextClient;
use std::sync::Arc;

use super::load_store;

pub(crate) async fn run(config: ServerConfig) -> Result<()> {
    let store = Arc::new(load_store(config.faq_file.as_deref())?);
    tracing::info!("Loaded {} FAQ entries", store.len());

    let text_client = TextClient::new(&config.upstream_url, config.upstream_timeout)?;
    tracing::info!(
        "Text service at {} (timeout {}s)",
        text_client.base_url(),
        config.upstream_timeout.as_secs()
    );
    if !config.static_dir.is_dir() {
        tracing::warn!("Static directory {} does not exist", config.static_dir.display());
    }

    let state = Arc::new(AppState::new(text_client, store, config.static_dir.clone()));
    let router = create_router(state);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}
