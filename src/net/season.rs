//! Season endpoints: per-league listing and creation, plus season detail.

#[cfg(test)]
#[path = "season_test.rs"]
mod season_test;

use super::error::ApiError;
use super::http;
use super::types::{Envelope, Season};

fn seasons_endpoint(league_id: u64) -> String {
    format!("/leagues/{league_id}/seasons")
}

fn create_season_endpoint(league_id: u64) -> String {
    format!("/leagues/{league_id}/seasons/create")
}

fn season_endpoint(id: u64) -> String {
    format!("/seasons/{id}")
}

/// Fetch a league's seasons via `GET /leagues/{id}/seasons`.
///
/// # Errors
///
/// Propagates the underlying [`ApiError`] unchanged.
pub async fn list_seasons(league_id: u64) -> Result<Vec<Season>, ApiError> {
    let envelope: Envelope<Vec<Season>> = http::get_json(&seasons_endpoint(league_id)).await?;
    Ok(envelope.data)
}

/// Create a season via `POST /leagues/{id}/seasons/create`.
///
/// # Errors
///
/// Propagates the underlying [`ApiError`] unchanged.
pub async fn create_season(
    league_id: u64,
    name: &str,
    counting_games: u32,
    has_finals: bool,
) -> Result<Season, ApiError> {
    let payload = serde_json::json!({
        "name": name,
        "countingGames": counting_games,
        "hasFinals": has_finals,
    });
    let envelope: Envelope<Season> =
        http::post_json(&create_season_endpoint(league_id), &payload).await?;
    Ok(envelope.data)
}

/// Fetch one season via `GET /seasons/{id}`.
///
/// # Errors
///
/// Propagates the underlying [`ApiError`] unchanged.
pub async fn get_season(id: u64) -> Result<Season, ApiError> {
    let envelope: Envelope<Season> = http::get_json(&season_endpoint(id)).await?;
    Ok(envelope.data)
}
