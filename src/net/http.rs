//! Thin HTTP wrapper over `gloo-net`.
//!
//! Every outgoing request is augmented with an `Authorization: Bearer`
//! header when a token is present in local storage; no header is added
//! otherwise. Responses are decoded into typed payloads, with non-2xx
//! statuses surfaced as [`ApiError::Status`] before any body decoding.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use gloo_net::http::{Request, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config;
use crate::util::storage;

/// Resolve an endpoint path against the configured API base.
pub(crate) fn api_url(path: &str) -> String {
    config::join_url(config::api_base(), path)
}

fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::token() {
        Some(token) => builder.header("Authorization", &bearer_value(&token)),
        None => builder,
    }
}

/// Issue a GET request and decode the JSON response body.
pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Issue a POST request with a JSON body and decode the JSON response body.
pub(crate) async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let resp = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
