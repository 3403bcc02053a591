//! Display formatting for wire values.

#[cfg(test)]
#[path = "fmt_test.rs"]
mod fmt_test;

use crate::net::types::User;

/// Reduce an ISO 8601 timestamp to its `YYYY-MM-DD` day for display.
///
/// Values that do not look like an ISO timestamp pass through unchanged.
pub fn format_date(iso: &str) -> String {
    match iso.get(..10) {
        Some(day) if day.as_bytes().get(4) == Some(&b'-') && day.as_bytes().get(7) == Some(&b'-') => {
            day.to_owned()
        }
        _ => iso.to_owned(),
    }
}

/// A user's display name, `"First Last"`.
pub fn full_name(user: &User) -> String {
    format!("{} {}", user.first_name, user.last_name).trim().to_owned()
}
