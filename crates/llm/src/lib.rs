//! Client for the upstream text-generation service behind the AI answer proxy.

mod client;
mod error;
mod prompt;


pub use client::{MAX_ERROR_BODY_LEN, TextClient};
pub use error::LlmError;
pub use prompt::{build_prompt, encode_prompt, preview, truncate};
