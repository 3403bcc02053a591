//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single `RwSignal<AuthState>` is provided at the app root and consumed
//! by the route guard, the layout chrome, and the login/signup pages. The
//! only mutation sites are [`login`], [`signup`], [`logout`], and
//! [`restore_session`]; everything else reads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::util::storage;

/// Authentication state tracking the current user and initial-load status.
///
/// `loading` starts true and drops to false exactly once, when the
/// startup session resolution finishes (with or without a user).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Derived, never stored independently: exactly "a user is present".
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Failure of a login or signup attempt.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The server rejected the credentials or registration payload.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The request failed before the server could judge the credentials.
    #[error(transparent)]
    Api(#[from] ApiError),
}

fn classify_auth_failure(err: ApiError) -> AuthError {
    match err {
        ApiError::Status(_) => AuthError::InvalidCredentials,
        other => AuthError::Api(other),
    }
}

fn apply_login(state: &mut AuthState, user: User) {
    state.user = Some(user);
    state.loading = false;
}

fn apply_logout(state: &mut AuthState) {
    state.user = None;
}

/// Log in and establish a session.
///
/// The token is stored before the user is set, so a resolved user always
/// implies a stored token. On failure the prior state is left untouched.
///
/// # Errors
///
/// [`AuthError::InvalidCredentials`] for any non-2xx response,
/// [`AuthError::Api`] for transport or decoding failures.
pub async fn login(auth: RwSignal<AuthState>, email: &str, password: &str) -> Result<(), AuthError> {
    let resp = net::auth::login(email, password)
        .await
        .map_err(classify_auth_failure)?;
    storage::store_token(&resp.token);
    log::info!("logged in as {}", resp.user.email);
    auth.update(|state| apply_login(state, resp.user));
    Ok(())
}

/// Register a new account and establish a session.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn signup(
    auth: RwSignal<AuthState>,
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> Result<(), AuthError> {
    let resp = net::auth::signup(email, password, first_name, last_name)
        .await
        .map_err(classify_auth_failure)?;
    storage::store_token(&resp.token);
    log::info!("signed up as {}", resp.user.email);
    auth.update(|state| apply_login(state, resp.user));
    Ok(())
}

/// Clear the stored token and current user synchronously. No network call.
pub fn logout(auth: RwSignal<AuthState>) {
    storage::clear_token();
    auth.update(apply_logout);
    log::info!("logged out");
}

/// Resolve a previously stored token into a user profile on app start.
///
/// Best-effort: any failure discards the token and leaves the session
/// anonymous. Never propagates an error past this boundary, and always
/// ends with `loading == false`.
pub fn restore_session(auth: RwSignal<AuthState>) {
    if storage::token().is_none() {
        auth.update(|state| state.loading = false);
        return;
    }
    leptos::task::spawn_local(async move {
        match net::auth::current_user().await {
            Ok(user) => {
                log::info!("session restored for {}", user.email);
                auth.update(|state| apply_login(state, user));
            }
            Err(err) => {
                log::warn!("session restore failed, dropping token: {err}");
                storage::clear_token();
                auth.update(|state| {
                    state.user = None;
                    state.loading = false;
                });
            }
        }
    });
}
