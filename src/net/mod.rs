//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request shaping and bearer-token attachment, `types` defines
//! the wire schema, and the domain modules (`auth`, `league`, `season`,
//! `event`) map one REST endpoint to one function each.

pub mod auth;
pub mod error;
pub mod event;
pub mod http;
pub mod league;
pub mod season;
pub mod types;
