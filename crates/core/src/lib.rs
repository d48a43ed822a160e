//! Core types and state for faq-desk
//!
//! This crate contains the FAQ store and the interaction state shared by the proxy
//! server and the widget.

mod accordion;
mod constants;
mod debounce;
mod env_config;
mod envelope;
mod error;
mod slug;
mod store;

pub use accordion::*;
pub use constants::*;
pub use debounce::*;
pub use env_config::*;
pub use envelope::*;
pub use error::*;
pub use slug::*;
pub use store::*;
