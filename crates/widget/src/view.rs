//! View renderer: projects a subset of the FAQ store into accordion items.

use faq_desk_core::{Accordion, FaqEntry, ItemState, Transition};
use serde::Serialize;

/// One rendered accordion item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewItem {
    pub slug: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Default)]
pub struct FaqView {
    items: Vec<ViewItem>,
    accordion: Accordion,
    renders: usize,
}

impl FaqView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible list with one collapsed item per entry.
    pub fn render(&mut self, entries: &[FaqEntry]) {
        self.items = entries
            .iter()
            .map(|e| ViewItem { slug: e.slug(), question: e.question.clone(), answer: e.answer.clone() })
            .collect();
        self.accordion.reset(self.items.iter().map(|i| i.slug.clone()).collect());
        self.renders += 1;
    }

    pub fn toggle(&mut self, slug: &str) -> Option<Transition> {
        self.accordion.toggle(slug)
    }

    pub fn expand(&mut self, slug: &str) -> bool {
        self.accordion.expand(slug)
    }

    #[must_use]
    pub fn items(&self) -> &[ViewItem] {
        &self.items
    }

    #[must_use]
    pub fn slugs(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.slug.as_str()).collect()
    }

    #[must_use]
    pub fn is_expanded(&self, slug: &str) -> bool {
        self.expanded_slug() == Some(slug)
    }

    #[must_use]
    pub fn expanded_slug(&self) -> Option<&str> {
        self.accordion.expanded_slug()
    }

    /// Items paired with their accordion state, in display order.
    pub fn states(&self) -> impl Iterator<Item = (&ViewItem, ItemState)> {
        self.items.iter().enumerate().map(|(i, item)| (item, self.accordion.state(i)))
    }

    /// How many times the list has been rendered.
    #[must_use]
    pub const fn renders(&self) -> usize {
        self.renders
    }
}
