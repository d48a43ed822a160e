//! Page location and history.
//!
//! The browser's history API is modeled as a stack of URLs with push and replace
//! semantics. Pushing creates a navigable entry, replacing rewrites the current one.

use reqwest::Url;

/// Value of query parameter `key`, if present.
#[must_use]
pub fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned())
}

/// Copy of `url` with parameter `key` set to `value`, or removed when `value` is
/// `None` or empty. Other parameters keep their order.
#[must_use]
pub fn with_query_param(url: &Url, key: &str, value: Option<&str>) -> Url {
    let value = value.filter(|v| !v.is_empty());
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;
    for (k, v) in url.query_pairs() {
        if k == key {
            if let (Some(new), false) = (value, replaced) {
                pairs.push((k.into_owned(), new.to_owned()));
                replaced = true;
            }
        } else {
            pairs.push((k.into_owned(), v.into_owned()));
        }
    }
    if let (Some(new), false) = (value, replaced) {
        pairs.push((key.to_owned(), new.to_owned()));
    }

    let mut next = url.clone();
    if pairs.is_empty() {
        next.set_query(None);
    } else {
        next.query_pairs_mut().clear().extend_pairs(pairs);
    }
    next
}

/// Copy of `url` with the fragment set, or cleared for `None`.
#[must_use]
pub fn with_fragment(url: &Url, fragment: Option<&str>) -> Url {
    let mut next = url.clone();
    next.set_fragment(fragment.filter(|f| !f.is_empty()));
    next
}

/// Fragment of `url` without the leading `#`, if non-empty.
#[must_use]
pub fn fragment(url: &Url) -> Option<&str> {
    url.fragment().filter(|f| !f.is_empty())
}

/// Navigation history the widget writes its state into.
pub trait History {
    fn current(&self) -> &Url;

    /// Add a new entry; the back button returns to the previous one.
    fn push(&mut self, url: Url);

    /// Overwrite the current entry without adding history.
    fn replace(&mut self, url: Url);
}

/// In-memory history stack.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Url>,
    index: usize,
}

impl MemoryHistory {
    #[must_use]
    pub fn new(initial: Url) -> Self {
        Self { entries: vec![initial], index: 0 }
    }

    /// Number of entries in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Step back one entry. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one entry. Returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

impl History for MemoryHistory {
    fn current(&self) -> &Url {
        &self.entries[self.index]
    }

    fn push(&mut self, url: Url) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url);
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, url: Url) {
        self.entries[self.index] = url;
    }
}
