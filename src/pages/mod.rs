//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form submission,
//! navigation) and delegates shared rendering details to `components`.

pub mod create_event;
pub mod create_league;
pub mod create_season;
pub mod event_detail;
pub mod league_detail;
pub mod leagues;
pub mod login;
pub mod season_detail;
pub mod signup;
