//! Reusable UI components below the page level.

pub mod guard;
pub mod layout;
pub mod league_card;
pub mod season_card;
