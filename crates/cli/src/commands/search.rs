use anyhow::Result;
use faq_desk_widget::FaqView;
use std::path::Path;

use super::load_store;

pub(crate) fn run(query: &str, faq_file: Option<&Path>) -> Result<()> {
    let store = load_store(faq_file)?;
    let mut view = FaqView::new();
    view.render(&store.filter(query));
    println!("{}", serde_json::to_string_pretty(view.items())?);
    Ok(())
}
