//! FAQ widget client logic.
//!
//! The search controller filters the FAQ store as the user types, keeps the search
//! term and the expanded item in the page URL, and shows answers fetched through the
//! AI proxy. Browser concerns are behind explicit seams: [`History`] for the URL and
//! [`FaqView`]/[`AiPanel`] for what would otherwise be DOM state.

mod controller;
mod html;
mod location;
mod panel;
mod proxy;
mod view;

#[cfg(test)]
mod controller_tests;

pub use controller::SearchController;
pub use html::{render_list_html, render_page_html};
pub use location::{History, MemoryHistory, fragment, query_param, with_fragment, with_query_param};
pub use panel::{AiAnswer, AiPanel, PanelState, Ticket};
pub use proxy::{AiProxyClient, AnswerSource, ProxyClientError, interpret_body};
pub use view::{FaqView, ViewItem};

pub use reqwest::Url;
