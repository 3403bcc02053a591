//! Wire-schema DTOs for the league backend.
//!
//! DESIGN
//! ======
//! Response shapes are declared explicitly and validated by serde at the
//! service boundary instead of trusting field presence downstream. The
//! canonical schema uses lowercase `id`, camelCase names, and `dateCreated`
//! timestamps; numeric ids are decoded tolerantly because the backend's
//! JSON layer occasionally emits them as floats.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Generic `{ "data": ... }` envelope wrapping list/detail responses.
///
/// Auth endpoints return bare objects; everything else is enveloped.
/// Service functions unwrap this so callers never see the transport shape.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// An account as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub id: u64,
    /// Login email address.
    pub email: String,
    /// Given name.
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Family name.
    #[serde(rename = "lastName")]
    pub last_name: String,
}

/// A top-level league owning seasons and a player roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    /// Unique league identifier.
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Where the league plays.
    pub location: String,
    /// ISO 8601 creation timestamp.
    #[serde(rename = "dateCreated")]
    pub date_created: String,
    /// The user who created the league.
    pub owner: User,
}

/// A scoring period within a league.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    /// Unique season identifier.
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub id: u64,
    /// Display name.
    pub name: String,
    /// ISO 8601 creation timestamp.
    #[serde(rename = "dateCreated")]
    pub date_created: String,
    /// Owning league.
    #[serde(rename = "leagueID", deserialize_with = "deserialize_u64_from_number")]
    pub league_id: u64,
    /// How many events count toward a player's season score.
    #[serde(rename = "countingGames")]
    pub counting_games: u32,
    /// Number of events scheduled so far.
    #[serde(rename = "eventCount")]
    pub event_count: u32,
    /// Whether the season ends with a finals stage.
    #[serde(rename = "hasFinals")]
    pub has_finals: bool,
    /// Points awarded by finishing rank, keyed by player count in a match.
    #[serde(rename = "pointDistribution", default)]
    pub point_distribution: HashMap<String, Vec<u32>>,
}

/// A league night or tournament within a season.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub id: u64,
    /// Display name.
    pub name: String,
    /// ISO 8601 date the event takes place.
    pub date: String,
    /// Venue, free-form.
    #[serde(default)]
    pub location: String,
    /// Owning season.
    #[serde(rename = "seasonID", deserialize_with = "deserialize_u64_from_number")]
    pub season_id: u64,
    /// Whether this event is the finals stage.
    #[serde(rename = "isFinals", default)]
    pub is_finals: bool,
}

/// A league roster member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player identifier.
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Owning league.
    #[serde(rename = "leagueID", deserialize_with = "deserialize_u64_from_number")]
    pub league_id: u64,
    /// IFPA registration number, when the player was imported from IFPA.
    #[serde(rename = "ifpaNumber", default)]
    pub ifpa_number: Option<String>,
}

/// Payload returned by `POST /auth/login` and `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    /// The authenticated account.
    pub user: User,
    /// Bearer token to persist for subsequent requests.
    pub token: String,
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected a non-negative integer id"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
