//! Single-select accordion state.
//!
//! Items are tracked by position in the rendered list and addressed by slug. At most
//! one item is expanded at any time.

/// Per-item display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Collapsed,
    Expanded,
}

/// Outcome of a toggle, carrying the slug whose state changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Expanded(String),
    Collapsed(String),
}

#[derive(Debug, Clone, Default)]
pub struct Accordion {
    slugs: Vec<String>,
    expanded: Option<usize>,
}

impl Accordion {
    #[must_use]
    pub fn new(slugs: Vec<String>) -> Self {
        Self { slugs, expanded: None }
    }

    /// Replace the tracked items. Everything starts collapsed.
    pub fn reset(&mut self, slugs: Vec<String>) {
        self.slugs = slugs;
        self.expanded = None;
    }

    /// Expand the item with `slug` if collapsed, collapse it if expanded.
    ///
    /// Expanding collapses every other item. Unknown slugs leave the state untouched.
    pub fn toggle(&mut self, slug: &str) -> Option<Transition> {
        let index = self.position(slug)?;
        if self.expanded == Some(index) {
            self.expanded = None;
            Some(Transition::Collapsed(slug.to_owned()))
        } else {
            self.expanded = Some(index);
            Some(Transition::Expanded(slug.to_owned()))
        }
    }

    /// Expand `slug` unconditionally. Returns false for unknown slugs.
    pub fn expand(&mut self, slug: &str) -> bool {
        match self.position(slug) {
            Some(index) => {
                self.expanded = Some(index);
                true
            },
            None => false,
        }
    }

    #[must_use]
    pub fn expanded_slug(&self) -> Option<&str> {
        self.expanded.and_then(|i| self.slugs.get(i)).map(String::as_str)
    }

    /// State of the item at `index` in the rendered list.
    #[must_use]
    pub fn state(&self, index: usize) -> ItemState {
        if self.expanded == Some(index) { ItemState::Expanded } else { ItemState::Collapsed }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    fn position(&self, slug: &str) -> Option<usize> {
        self.slugs.iter().position(|s| s == slug)
    }
}
