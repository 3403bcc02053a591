//! League endpoints: listing, detail, creation, and the player roster.

#[cfg(test)]
#[path = "league_test.rs"]
mod league_test;

use super::error::ApiError;
use super::http;
use super::types::{Envelope, League, Player};

const LEAGUES_ENDPOINT: &str = "/leagues";
const CREATE_LEAGUE_ENDPOINT: &str = "/leagues/create";

fn league_endpoint(id: u64) -> String {
    format!("/leagues/{id}")
}

fn players_endpoint(league_id: u64) -> String {
    format!("/leagues/{league_id}/players")
}

fn players_ifpa_endpoint(league_id: u64) -> String {
    format!("/leagues/{league_id}/players/ifpa")
}

/// Fetch all leagues via `GET /leagues`.
///
/// # Errors
///
/// Propagates the underlying [`ApiError`] unchanged.
pub async fn list_leagues() -> Result<Vec<League>, ApiError> {
    let envelope: Envelope<Vec<League>> = http::get_json(LEAGUES_ENDPOINT).await?;
    Ok(envelope.data)
}

/// Fetch one league via `GET /leagues/{id}`.
///
/// # Errors
///
/// Propagates the underlying [`ApiError`] unchanged.
pub async fn get_league(id: u64) -> Result<League, ApiError> {
    let envelope: Envelope<League> = http::get_json(&league_endpoint(id)).await?;
    Ok(envelope.data)
}

/// Create a league via `POST /leagues/create`.
///
/// # Errors
///
/// Propagates the underlying [`ApiError`] unchanged.
pub async fn create_league(name: &str, location: &str) -> Result<League, ApiError> {
    let payload = serde_json::json!({ "name": name, "location": location });
    let envelope: Envelope<League> = http::post_json(CREATE_LEAGUE_ENDPOINT, &payload).await?;
    Ok(envelope.data)
}

/// Fetch a league's roster via `GET /leagues/{id}/players`.
///
/// # Errors
///
/// Propagates the underlying [`ApiError`] unchanged.
pub async fn list_players(league_id: u64) -> Result<Vec<Player>, ApiError> {
    let envelope: Envelope<Vec<Player>> = http::get_json(&players_endpoint(league_id)).await?;
    Ok(envelope.data)
}

/// Add players by IFPA number via `POST /leagues/{id}/players/ifpa`.
///
/// Returns the full set of players added or already present for the given
/// numbers.
///
/// # Errors
///
/// Propagates the underlying [`ApiError`] unchanged.
pub async fn add_players_by_ifpa(league_id: u64, ifpa_numbers: &[u32]) -> Result<Vec<Player>, ApiError> {
    let payload = serde_json::json!({ "ifpaNumbers": ifpa_numbers });
    let envelope: Envelope<Vec<Player>> =
        http::post_json(&players_ifpa_endpoint(league_id), &payload).await?;
    Ok(envelope.data)
}
