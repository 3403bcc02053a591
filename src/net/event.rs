//! Event endpoints: per-season listing and creation, plus event detail.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use super::error::ApiError;
use super::http;
use super::types::{Envelope, Event};

fn events_endpoint(season_id: u64) -> String {
    format!("/seasons/{season_id}/events")
}

fn create_event_endpoint(season_id: u64) -> String {
    format!("/seasons/{season_id}/events/create")
}

fn event_endpoint(id: u64) -> String {
    format!("/events/{id}")
}

/// Fetch a season's events via `GET /seasons/{id}/events`.
///
/// # Errors
///
/// Propagates the underlying [`ApiError`] unchanged.
pub async fn list_events(season_id: u64) -> Result<Vec<Event>, ApiError> {
    let envelope: Envelope<Vec<Event>> = http::get_json(&events_endpoint(season_id)).await?;
    Ok(envelope.data)
}

/// Create an event via `POST /seasons/{id}/events/create`.
///
/// # Errors
///
/// Propagates the underlying [`ApiError`] unchanged.
pub async fn create_event(
    season_id: u64,
    name: &str,
    date: &str,
    location: &str,
) -> Result<Event, ApiError> {
    let payload = serde_json::json!({ "name": name, "date": date, "location": location });
    let envelope: Envelope<Event> =
        http::post_json(&create_event_endpoint(season_id), &payload).await?;
    Ok(envelope.data)
}

/// Fetch one event via `GET /events/{id}`.
///
/// # Errors
///
/// Propagates the underlying [`ApiError`] unchanged.
pub async fn get_event(id: u64) -> Result<Event, ApiError> {
    let envelope: Envelope<Event> = http::get_json(&event_endpoint(id)).await?;
    Ok(envelope.data)
}
