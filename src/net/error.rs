//! Error taxonomy for the REST layer.

/// Failure of a single API call.
///
/// Domain service functions propagate these unchanged; page components
/// collapse them into a static user-facing message. Nothing is retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, refused, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The response body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),
}
