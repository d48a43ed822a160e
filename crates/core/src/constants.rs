//! Shared constants for faq-desk.
//!
//! Centralizes values that both the proxy server and the widget rely on.

use std::time::Duration;

/// Default listening port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Public text-generation endpoint. Accepts the prompt as the URL path.
pub const DEFAULT_UPSTREAM_URL: &str = "https://text.pollinations.ai";

/// Timeout applied to the outbound text-generation call.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

/// Directory the server serves static assets from.
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Path of the AI proxy endpoint.
pub const ASK_AI_PATH: &str = "/api/ask-ai";

/// URL query parameter mirroring the active search term.
pub const QUERY_PARAM: &str = "q";

/// Quiet period for live filtering while typing.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Instruction prepended to every forwarded query.
pub const PROMPT_PREFIX: &str =
    "You are a helpful customer support assistant. Answer concisely: ";

/// Number of query characters echoed into the proxy log line.
pub const LOG_QUERY_PREVIEW_CHARS: usize = 50;

/// 400 body when the proxy receives no usable query.
pub const QUERY_REQUIRED_MESSAGE: &str = "Query is required";

/// 500 body when the upstream call fails. Upstream detail is only logged.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to get answer from AI";

/// Shown in the AI panel when the proxy returned no candidate answer.
pub const NO_ANSWER_MESSAGE: &str = "I couldn't find an answer to that question.";

/// Prefix of the inline error shown in the AI panel.
pub const ERROR_MESSAGE_PREFIX: &str = "Sorry, something went wrong: ";
