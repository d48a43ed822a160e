use faq_desk_core::PROMPT_PREFIX;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left untouched by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Wrap a user query in the support-assistant instruction.
#[must_use]
pub fn build_prompt(query: &str) -> String {
    format!("{PROMPT_PREFIX}{query}")
}

/// Percent-encode a prompt so it can be used as a single path segment.
#[must_use]
pub fn encode_prompt(prompt: &str) -> String {
    utf8_percent_encode(prompt, URI_COMPONENT).to_string()
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}

/// First `max_chars` characters of `s`, for log lines.
#[must_use]
pub fn preview(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
