//! Build-time configuration.
//!
//! The auth service base URL is baked in at compile time from
//! `AUTH_API_BASE_URL` (e.g. `AUTH_API_BASE_URL=http://localhost:8080 trunk
//! serve`), falling back to the production service.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use controller::consts::DEFAULT_BASE_URL;

/// Base URL for auth API calls, without a trailing slash.
pub fn api_base_url() -> &'static str {
    base_url_from(option_env!("AUTH_API_BASE_URL"))
}

fn base_url_from(raw: Option<&'static str>) -> &'static str {
    match raw.map(|value| value.trim().trim_end_matches('/')) {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_BASE_URL,
    }
}
