use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use faq_desk_core::{FaqStore, ItemState, Transition};
use reqwest::Url;
use tokio::time::Instant;

use crate::controller::SearchController;
use crate::location::{History, MemoryHistory, fragment, query_param};
use crate::panel::{AiAnswer, PanelState};
use crate::proxy::AnswerSource;

#[derive(Clone)]
struct RecordingSource {
    calls: Arc<Mutex<Vec<String>>>,
    answer: AiAnswer,
}

impl RecordingSource {
    fn answering(text: &str) -> Self {
        Self { calls: Arc::default(), answer: AiAnswer::Answered(text.to_owned()) }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnswerSource for RecordingSource {
    async fn ask(&self, query: &str) -> AiAnswer {
        self.calls.lock().unwrap().push(query.to_owned());
        self.answer.clone()
    }
}

fn controller_at(url: &str) -> (SearchController<MemoryHistory, RecordingSource>, RecordingSource) {
    let source = RecordingSource::answering("AI says hi");
    let history = MemoryHistory::new(Url::parse(url).unwrap());
    let controller = SearchController::new(Arc::new(FaqStore::builtin()), history, source.clone());
    (controller, source)
}

fn current_q(c: &SearchController<MemoryHistory, RecordingSource>) -> Option<String> {
    query_param(c.history().current(), "q")
}

#[tokio::test]
async fn test_new_shows_full_list_with_hidden_panel() {
    let (controller, source) = controller_at("http://localhost:3000/");
    assert_eq!(controller.view().items().len(), 5);
    assert_eq!(controller.panel().state(), PanelState::Hidden);
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn test_initial_query_param_searches_once_without_push() {
    let (mut controller, source) = controller_at("http://localhost:3000/?q=password");
    controller.init().await;

    assert_eq!(controller.input(), "password");
    assert_eq!(controller.view().slugs(), vec!["how-do-i-reset-my-password"]);
    assert_eq!(source.calls(), vec!["password"]);
    assert_eq!(controller.history().len(), 1);
    assert_eq!(controller.panel().state(), PanelState::Answered);
}

#[tokio::test]
async fn test_initial_load_without_query_makes_no_call() {
    let (mut controller, source) = controller_at("http://localhost:3000/");
    controller.init().await;
    assert!(source.calls().is_empty());
    assert_eq!(controller.view().renders(), 1);
}

#[tokio::test]
async fn test_initial_fragment_expands_item() {
    let (mut controller, _) = controller_at("http://localhost:3000/#how-do-i-contact-support");
    controller.init().await;
    assert_eq!(controller.view().expanded_slug(), Some("how-do-i-contact-support"));
}

#[tokio::test]
async fn test_initial_fragment_outside_filtered_set_is_ignored() {
    let (mut controller, _) =
        controller_at("http://localhost:3000/?q=trial#how-do-i-contact-support");
    controller.init().await;
    assert_eq!(controller.view().slugs(), vec!["is-there-a-free-trial-available"]);
    assert_eq!(controller.view().expanded_slug(), None);
    assert_eq!(fragment(controller.history().current()), None);
    assert_eq!(current_q(&controller).as_deref(), Some("trial"));
}

#[tokio::test]
async fn test_initial_fragment_kept_when_item_is_rendered() {
    let (mut controller, _) =
        controller_at("http://localhost:3000/?q=support#how-do-i-contact-support");
    controller.init().await;
    assert_eq!(controller.view().expanded_slug(), Some("how-do-i-contact-support"));
    assert_eq!(fragment(controller.history().current()), Some("how-do-i-contact-support"));
    assert_eq!(controller.history().len(), 1);
}

#[tokio::test]
async fn test_submit_clears_fragment_of_collapsed_item() {
    let (mut controller, _) = controller_at("http://localhost:3000/#how-do-i-contact-support");
    controller.init().await;
    assert_eq!(controller.view().expanded_slug(), Some("how-do-i-contact-support"));

    controller.set_input("password");
    controller.submit().await;

    assert_eq!(controller.view().expanded_slug(), None);
    assert_eq!(fragment(controller.history().current()), None);
    assert_eq!(current_q(&controller).as_deref(), Some("password"));
    assert!(controller.history_mut().back());
    assert_eq!(fragment(controller.history().current()), Some("how-do-i-contact-support"));
}

#[tokio::test]
async fn test_live_filter_clears_fragment_of_collapsed_item() {
    let (mut controller, _) = controller_at("http://localhost:3000/?q=you");
    controller.init().await;
    let first = controller.view().slugs()[0].to_owned();
    controller.toggle(&first);
    assert_eq!(fragment(controller.history().current()), Some(first.as_str()));

    let start = Instant::now();
    controller.type_text_at("support", start);
    assert!(controller.poll_typing(start + Duration::from_millis(300)));

    assert_eq!(controller.view().expanded_slug(), None);
    assert_eq!(fragment(controller.history().current()), None);
    assert_eq!(current_q(&controller).as_deref(), Some("support"));
    assert_eq!(controller.history().len(), 1);
}

#[tokio::test]
async fn test_submit_pushes_history_and_asks_ai() {
    let (mut controller, source) = controller_at("http://localhost:3000/");
    controller.set_input("  Free TRIAL ");
    controller.submit().await;

    assert_eq!(controller.history().len(), 2);
    assert_eq!(current_q(&controller).as_deref(), Some("free trial"));
    assert_eq!(source.calls(), vec!["free trial"]);
    assert_eq!(controller.view().slugs(), vec!["is-there-a-free-trial-available"]);
    assert_eq!(controller.panel().answer().map(AiAnswer::text), Some("AI says hi"));

    controller.set_input("support");
    controller.submit().await;
    assert_eq!(controller.history().len(), 3);
    assert!(controller.history_mut().back());
    assert_eq!(current_q(&controller).as_deref(), Some("free trial"));
}

#[tokio::test]
async fn test_submit_without_local_matches_still_asks_ai() {
    let (mut controller, source) = controller_at("http://localhost:3000/");
    controller.set_input("refunds");
    controller.submit().await;
    assert!(controller.view().items().is_empty());
    assert_eq!(source.calls(), vec!["refunds"]);
}

#[tokio::test]
async fn test_blank_submit_resets_and_hides_panel() {
    let (mut controller, source) = controller_at("http://localhost:3000/?q=password");
    controller.init().await;
    controller.set_input("   ");
    controller.submit().await;

    assert_eq!(controller.view().items().len(), 5);
    assert_eq!(controller.panel().state(), PanelState::Hidden);
    assert_eq!(source.calls().len(), 1);
    assert_eq!(current_q(&controller), None);
}

#[tokio::test]
async fn test_keystroke_burst_filters_once_with_last_value() {
    let (mut controller, source) = controller_at("http://localhost:3000/");
    let start = Instant::now();
    let renders_before = controller.view().renders();

    for (offset_ms, value) in [(0, "p"), (50, "pa"), (100, "pas"), (150, "pass")] {
        let now = start + Duration::from_millis(offset_ms);
        assert!(!controller.poll_typing(now));
        controller.type_text_at(value, now);
    }
    assert!(!controller.poll_typing(start + Duration::from_millis(449)));
    assert!(controller.poll_typing(start + Duration::from_millis(450)));
    assert!(!controller.poll_typing(start + Duration::from_millis(2000)));

    assert_eq!(controller.view().renders(), renders_before + 1);
    assert_eq!(controller.view().slugs(), vec!["how-do-i-reset-my-password"]);
    assert_eq!(current_q(&controller).as_deref(), Some("pass"));
    assert_eq!(controller.history().len(), 1);
    assert!(source.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_settle_runs_live_filter_after_quiet_period() {
    let (mut controller, source) = controller_at("http://localhost:3000/");
    for value in ["t", "tr", "tri", "trial"] {
        controller.type_text(value);
        tokio::time::advance(Duration::from_millis(50)).await;
    }
    let before = Instant::now();

    assert!(controller.settle().await);
    assert!(Instant::now() >= before + Duration::from_millis(250));
    assert_eq!(controller.view().renders(), 2);
    assert_eq!(controller.view().slugs(), vec!["is-there-a-free-trial-available"]);
    assert!(source.calls().is_empty());
    assert!(!controller.settle().await);
}

#[tokio::test]
async fn test_live_typing_to_empty_hides_panel() {
    let (mut controller, _) = controller_at("http://localhost:3000/?q=password");
    controller.init().await;
    assert_eq!(controller.panel().state(), PanelState::Answered);

    let start = Instant::now();
    controller.type_text_at("", start);
    assert!(controller.poll_typing(start + Duration::from_millis(300)));

    assert_eq!(controller.panel().state(), PanelState::Hidden);
    assert_eq!(controller.view().items().len(), 5);
    assert_eq!(current_q(&controller), None);
}

#[tokio::test]
async fn test_submit_cancels_pending_live_filter() {
    let (mut controller, source) = controller_at("http://localhost:3000/");
    let start = Instant::now();
    controller.type_text_at("support", start);
    controller.submit().await;
    let renders = controller.view().renders();

    assert!(!controller.poll_typing(start + Duration::from_secs(1)));
    assert_eq!(controller.view().renders(), renders);
    assert_eq!(source.calls(), vec!["support"]);
}

#[tokio::test]
async fn test_toggle_mirrors_fragment() {
    let (mut controller, _) = controller_at("http://localhost:3000/?q=you");
    controller.init().await;
    let first = controller.view().slugs()[0].to_owned();
    let second = controller.view().slugs()[1].to_owned();

    assert_eq!(controller.toggle(&first), Some(Transition::Expanded(first.clone())));
    assert_eq!(fragment(controller.history().current()), Some(first.as_str()));

    controller.toggle(&second);
    assert_eq!(fragment(controller.history().current()), Some(second.as_str()));
    let expanded: Vec<_> = controller
        .view()
        .states()
        .filter(|(_, s)| *s == ItemState::Expanded)
        .map(|(item, _)| item.slug.clone())
        .collect();
    assert_eq!(expanded, vec![second.clone()]);

    assert_eq!(controller.toggle(&second), Some(Transition::Collapsed(second.clone())));
    assert_eq!(fragment(controller.history().current()), None);
    assert_eq!(current_q(&controller).as_deref(), Some("you"));
    assert_eq!(controller.history().len(), 1);
}

#[tokio::test]
async fn test_toggle_unknown_slug_leaves_url_alone() {
    let (mut controller, _) = controller_at("http://localhost:3000/#keep");
    assert_eq!(controller.toggle("nope"), None);
    assert_eq!(fragment(controller.history().current()), Some("keep"));
}
