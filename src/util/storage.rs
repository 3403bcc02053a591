//! Bearer-token persistence in browser local storage.
//!
//! The token is the only piece of session state that survives a reload;
//! the resolved user profile lives in memory and is re-fetched on start.
//! All operations are best-effort: storage access failures read as an
//! absent token.

const TOKEN_KEY: &str = "token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// The stored bearer token, if any.
pub fn token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Persist the bearer token.
pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Remove the bearer token.
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
