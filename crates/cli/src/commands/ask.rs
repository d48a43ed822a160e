use anyhow::Result;
use faq_desk_widget::{AiProxyClient, MemoryHistory, SearchController, Url};
use std::path::Path;
use std::sync::Arc;

use super::load_store;

pub(crate) async fn run(query: String, server: &str, faq_file: Option<&Path>) -> Result<()> {
    let store = Arc::new(load_store(faq_file)?);
    let source = AiProxyClient::new(server)?;
    let history = MemoryHistory::new(Url::parse(server)?);

    let mut controller = SearchController::new(store, history, source);
    controller.set_input(query);
    controller.submit().await;

    let output = serde_json::json!({
        "matches": controller.view().items(),
        "ai": controller.panel().answer(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
