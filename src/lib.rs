//! # pinleague
//!
//! Leptos + WASM single-page client for managing pinball leagues: signup and
//! login, league and season creation, player rosters, and event schedules,
//! all backed by a remote REST API.
//!
//! This crate contains pages, components, application state, the typed REST
//! layer, and small browser utility modules. There is no server here; every
//! domain operation is one HTTP call against the configured backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
