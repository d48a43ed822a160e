//! HTTP server for faq-desk.
//!
//! Serves the AI answer proxy, the FAQ page and the static assets next to it.

#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]

mod answers;
pub mod api_error;
mod config;
mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use faq_desk_core::{ASK_AI_PATH, FaqStore};
use faq_desk_llm::TextClient;

pub use config::ServerConfig;

/// Page heading and title of the FAQ page.
pub const DEFAULT_TITLE: &str = "Frequently Asked Questions";

/// Shared application state for all HTTP handlers.
///
/// Immutable after startup; requests share nothing else.
pub struct AppState {
    /// Client for the upstream text-generation service
    pub text_client: TextClient,
    /// FAQ entries rendered on the page
    pub store: Arc<FaqStore>,
    /// Directory static assets are served from
    pub static_dir: PathBuf,
    /// Heading and `<title>` of the FAQ page
    pub title: String,
}

impl AppState {
    #[must_use]
    pub fn new(text_client: TextClient, store: Arc<FaqStore>, static_dir: PathBuf) -> Self {
        Self { text_client, store, static_dir, title: DEFAULT_TITLE.to_owned() }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.static_dir);
    Router::new()
        .route("/", get(handlers::page::faq_page))
        .route("/health", get(health))
        .route(ASK_AI_PATH, post(handlers::ask::ask_ai))
        .fallback_service(assets)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Resolves on Ctrl-C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

async fn health() -> &'static str {
    "ok"
}
