//! Auth endpoints: login, signup, current-user lookup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::http;
use super::types::{AuthResponse, User};

const LOGIN_ENDPOINT: &str = "/auth/login";
const SIGNUP_ENDPOINT: &str = "/auth/signup";
const ME_ENDPOINT: &str = "/auth/me";

/// Exchange credentials for a token via `POST /auth/login`.
///
/// # Errors
///
/// Any non-2xx response (including invalid credentials) surfaces as
/// [`ApiError::Status`]; transport failures as [`ApiError::Network`].
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let payload = serde_json::json!({ "email": email, "password": password });
    http::post_json(LOGIN_ENDPOINT, &payload).await
}

/// Register a new account via `POST /auth/signup`.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn signup(
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> Result<AuthResponse, ApiError> {
    let payload = serde_json::json!({
        "email": email,
        "password": password,
        "firstName": first_name,
        "lastName": last_name,
    });
    http::post_json(SIGNUP_ENDPOINT, &payload).await
}

/// Resolve the stored bearer token to a user profile via `GET /auth/me`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] when the token is missing, expired, or
/// revoked.
pub async fn current_user() -> Result<User, ApiError> {
    http::get_json(ME_ENDPOINT).await
}
