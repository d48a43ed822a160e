//! Environment variable parsing with warn-level logging for invalid values.

use std::env::VarError;

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    parse_or_default(var, std::env::var(var), default)
}

/// Read a string environment variable, treating unset and blank values alike.
#[must_use]
pub fn env_string(var: &str) -> Option<String> {
    non_blank(std::env::var(var))
}

fn non_blank(value: Result<String, VarError>) -> Option<String> {
    value.ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_or_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    value: Result<String, VarError>,
    default: T,
) -> T {
    match value {
        Ok(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}
