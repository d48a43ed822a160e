//! HTML projection of the widget state.
//!
//! FAQ text and AI answers are escaped; the AI answer is never injected as markup.
//! Items expand through the URL fragment (`:target` in the stylesheet), so at most one
//! is open and the fragment always names it.

use askama::Template;
use faq_desk_core::{ItemState, QUERY_PARAM};

use crate::panel::{AiAnswer, AiPanel, PanelState};
use crate::view::FaqView;

struct ItemRow<'a> {
    slug: &'a str,
    question: &'a str,
    answer: &'a str,
    expanded: bool,
}

struct PanelRow<'a> {
    hidden: bool,
    loading: bool,
    class: &'static str,
    text: &'a str,
}

#[derive(Template)]
#[template(
    source = r##"<div id="faq-list" class="faq-list">
{%- for item in items %}
  <div class="faq-item{% if item.expanded %} active{% endif %}" id="{{ item.slug }}">
    <a class="faq-question faq-open" href="#{{ item.slug }}">{{ item.question }}</a>
    <a class="faq-question faq-close" href="#">{{ item.question }}</a>
    <div class="faq-answer"><p>{{ item.answer }}</p></div>
  </div>
{%- endfor %}
{%- if items.is_empty() %}
  <p class="faq-empty">No matching questions</p>
{%- endif %}
</div>"##,
    ext = "html"
)]
struct ListTemplate<'a> {
    items: Vec<ItemRow<'a>>,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{{ title }}</title>
    <link rel="stylesheet" href="/style.css" />
  </head>
  <body>
    <main class="faq-container">
      <h1>{{ title }}</h1>
      <form class="search-box" method="get" action="/">
        <input id="search-input" type="search" name="{{ param }}" value="{{ query }}" placeholder="Search for answers..." />
        <button id="search-btn" type="submit">Search</button>
      </form>
      <section id="ai-response-container" class="ai-response{% if panel.hidden %} hidden{% endif %}">
        <div class="ai-loading{% if !panel.loading %} hidden{% endif %}">Thinking...</div>
        <div id="ai-content" class="{{ panel.class }}">{{ panel.text }}</div>
      </section>
      {{ list|safe }}
    </main>
  </body>
</html>"#,
    ext = "html"
)]
struct PageTemplate<'a> {
    title: &'a str,
    param: &'a str,
    query: &'a str,
    panel: PanelRow<'a>,
    list: String,
}

/// Render the accordion list.
///
/// # Errors
/// Returns an error if template rendering fails.
pub fn render_list_html(view: &FaqView) -> Result<String, askama::Error> {
    let items = view
        .states()
        .map(|(item, state)| ItemRow {
            slug: &item.slug,
            question: &item.question,
            answer: &item.answer,
            expanded: state == ItemState::Expanded,
        })
        .collect();
    ListTemplate { items }.render()
}

/// Render a full page: search form, AI panel and accordion list.
///
/// # Errors
/// Returns an error if template rendering fails.
pub fn render_page_html(
    title: &str,
    query: &str,
    view: &FaqView,
    panel: &AiPanel,
) -> Result<String, askama::Error> {
    let state = panel.state();
    let panel = PanelRow {
        hidden: state == PanelState::Hidden,
        loading: state == PanelState::Loading,
        class: match state {
            PanelState::Errored => "ai-error",
            PanelState::NoAnswer => "ai-empty",
            _ => "ai-answer",
        },
        text: panel.answer().map_or("", AiAnswer::text),
    };
    PageTemplate { title, param: QUERY_PARAM, query, panel, list: render_list_html(view)? }.render()
}
