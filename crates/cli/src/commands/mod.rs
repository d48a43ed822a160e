pub(crate) mod ask;
pub(crate) mod search;
pub(crate) mod serve;

use anyhow::{Context, Result};
use faq_desk_core::FaqStore;
use std::path::Path;

/// FAQs from `faq_file`, or the built-in list when none is given.
pub(crate) fn load_store(faq_file: Option<&Path>) -> Result<FaqStore> {
    let store = match faq_file {
        Some(path) => FaqStore::from_json_file(path)
            .with_context(|| format!("failed to load FAQs from {}", path.display()))?,
        None => FaqStore::builtin(),
    };
    for (slug, count) in store.slug_collisions() {
        tracing::warn!(%slug, count, "FAQ questions share a slug; only the first is addressable by fragment");
    }
    Ok(store)
}
