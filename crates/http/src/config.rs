//! Server configuration gathered from the environment.

use std::path::PathBuf;
use std::time::Duration;

use faq_desk_core::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR, DEFAULT_UPSTREAM_TIMEOUT_SECS,
    DEFAULT_UPSTREAM_URL, env_parse_with_default, env_string,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
    pub static_dir: PathBuf,
    /// JSON file replacing the built-in FAQs.
    pub faq_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            upstream_url: DEFAULT_UPSTREAM_URL.to_owned(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            faq_file: None,
        }
    }
}

impl ServerConfig {
    /// Read `PORT`, `HOST`, `FAQ_DESK_UPSTREAM_URL`, `FAQ_DESK_UPSTREAM_TIMEOUT_SECS`,
    /// `FAQ_DESK_STATIC_DIR` and `FAQ_DESK_FAQ_FILE`, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_string("HOST").unwrap_or(defaults.host),
            port: env_parse_with_default("PORT", defaults.port),
            upstream_url: env_string("FAQ_DESK_UPSTREAM_URL").unwrap_or(defaults.upstream_url),
            upstream_timeout: Duration::from_secs(env_parse_with_default(
                "FAQ_DESK_UPSTREAM_TIMEOUT_SECS",
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )),
            static_dir: env_string("FAQ_DESK_STATIC_DIR")
                .map_or(defaults.static_dir, PathBuf::from),
            faq_file: env_string("FAQ_DESK_FAQ_FILE").map(PathBuf::from),
        }
    }

    /// `host:port` string to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
