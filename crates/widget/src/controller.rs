//! Search controller: owns the query, filters the store, keeps the URL in sync and
//! drives the AI answer panel.

use std::sync::Arc;

use faq_desk_core::{Debouncer, FaqStore, QUERY_PARAM, SEARCH_DEBOUNCE, Transition, normalize_query};
use tokio::time::Instant;

use crate::location::{History, fragment, query_param, with_fragment, with_query_param};
use crate::panel::AiPanel;
use crate::proxy::AnswerSource;
use crate::view::FaqView;

pub struct SearchController<H, S> {
    store: Arc<FaqStore>,
    history: H,
    source: S,
    view: FaqView,
    panel: AiPanel,
    input: String,
    typing: Debouncer<String>,
}

impl<H: History, S: AnswerSource> SearchController<H, S> {
    /// Build a controller showing the full, unfiltered store.
    pub fn new(store: Arc<FaqStore>, history: H, source: S) -> Self {
        let mut view = FaqView::new();
        view.render(store.entries());
        Self {
            store,
            history,
            source,
            view,
            panel: AiPanel::new(),
            input: String::new(),
            typing: Debouncer::new(SEARCH_DEBOUNCE),
        }
    }

    /// Apply the deep link in the current location.
    ///
    /// A `q` parameter pre-fills the input and runs a search without pushing history.
    /// A fragment naming a rendered item expands it; any other fragment is dropped.
    pub async fn init(&mut self) {
        let requested = fragment(self.history.current()).map(str::to_owned);
        if let Some(initial) = query_param(self.history.current(), QUERY_PARAM).filter(|q| !q.is_empty()) {
            tracing::debug!(query = %initial, "initial search from URL");
            self.input = initial;
            self.search(false).await;
        }
        if let Some(slug) = requested {
            let expanded = self.view.expand(&slug);
            if !expanded {
                tracing::debug!(%slug, "URL fragment does not match a visible item");
            }
            let url = with_fragment(self.history.current(), expanded.then_some(slug.as_str()));
            self.history.replace(url);
        }
    }

    /// Explicit submission: button click or Enter.
    pub async fn submit(&mut self) {
        self.search(true).await;
    }

    /// Run a search for the current input value.
    ///
    /// With `persist_history` the query is written to the URL as a new history entry.
    /// A blank query shows everything and hides the AI panel. Otherwise the filtered
    /// list is shown and the AI proxy is asked, whether or not anything matched.
    pub async fn search(&mut self, persist_history: bool) {
        self.typing.cancel();
        let query = normalize_query(&self.input);

        // Rendering collapses every item, so the fragment never survives a search.
        if persist_history {
            let url = with_query_param(self.history.current(), QUERY_PARAM, Some(&query));
            self.history.push(with_fragment(&url, None));
        } else if fragment(self.history.current()).is_some() {
            let url = with_fragment(self.history.current(), None);
            self.history.replace(url);
        }

        if query.is_empty() {
            self.view.render(self.store.entries());
            self.panel.hide();
            return;
        }

        let filtered = self.store.filter(&query);
        tracing::debug!(%query, matches = filtered.len(), "filtered FAQ list");
        self.view.render(&filtered);
        self.fetch_ai_answer(&query).await;
    }

    /// Ask the proxy about `query` and show the outcome in the AI panel.
    pub async fn fetch_ai_answer(&mut self, query: &str) {
        let ticket = self.panel.begin();
        let answer = self.source.ask(query).await;
        self.panel.complete(ticket, answer);
    }

    /// Record a keystroke. Filtering happens once typing pauses.
    pub fn type_text(&mut self, value: impl Into<String>) {
        self.type_text_at(value, Instant::now());
    }

    pub fn type_text_at(&mut self, value: impl Into<String>, now: Instant) {
        self.input = value.into();
        self.typing.push(self.input.clone(), now);
    }

    /// Run the live filter if the quiet period has elapsed at `now`.
    pub fn poll_typing(&mut self, now: Instant) -> bool {
        match self.typing.poll(now) {
            Some(value) => {
                self.live_filter(&value);
                true
            },
            None => false,
        }
    }

    /// Wait for the pending keystroke's quiet period, then run the live filter.
    pub async fn settle(&mut self) -> bool {
        match self.typing.settle().await {
            Some(value) => {
                self.live_filter(&value);
                true
            },
            None => false,
        }
    }

    /// Live typing: re-filter and replace the URL, never calling the AI proxy.
    fn live_filter(&mut self, raw: &str) {
        let query = normalize_query(raw);
        let url = with_query_param(self.history.current(), QUERY_PARAM, Some(&query));
        self.history.replace(with_fragment(&url, None));

        if query.is_empty() {
            self.view.render(self.store.entries());
            self.panel.hide();
        } else {
            self.view.render(&self.store.filter(&query));
        }
    }

    /// Toggle an accordion item and mirror the result into the URL fragment.
    pub fn toggle(&mut self, slug: &str) -> Option<Transition> {
        let transition = self.view.toggle(slug)?;
        let fragment = match transition {
            Transition::Expanded(ref slug) => Some(slug.as_str()),
            Transition::Collapsed(_) => None,
        };
        let url = with_fragment(self.history.current(), fragment);
        self.history.replace(url);
        Some(transition)
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Set the input value without scheduling a live filter.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    #[must_use]
    pub const fn view(&self) -> &FaqView {
        &self.view
    }

    #[must_use]
    pub const fn panel(&self) -> &AiPanel {
        &self.panel
    }

    #[must_use]
    pub const fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}
