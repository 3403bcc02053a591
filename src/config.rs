//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base URL is baked into the WASM binary at build time so the
//! deployed bundle stays a static artifact with no runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base path used when `PINLEAGUE_API_BASE` is not set at build time.
///
/// The default assumes the bundle is served behind the same origin as the
/// backend (or a dev proxy) exposing the API under `/api`.
pub const DEFAULT_API_BASE: &str = "/api";

/// The configured API base URL.
pub fn api_base() -> &'static str {
    option_env!("PINLEAGUE_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Join the API base with an endpoint path, normalizing slashes.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
