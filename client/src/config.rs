//! Build-time configuration.
//!
//! The API base URL is baked into the WASM bundle from `MEDICARE_API_URL` at
//! compile time; there is no runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base used when `MEDICARE_API_URL` is unset at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Base URL every API path is appended to.
pub fn api_base_url() -> &'static str {
    resolve_api_url(option_env!("MEDICARE_API_URL"))
}

fn resolve_api_url(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
}
