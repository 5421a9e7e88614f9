//! flightdesk-server: read-only HTTP query service over a flight-booking store
//!
//! Exposes ticket lookup, the departures board, and flight-duration lookup
//! as JSON over HTTP. Every request borrows exactly one pooled connection
//! and gives it back when the request finishes.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, ServiceConfig};
pub use db::{FlightStore, PgFlightStore};
pub use http::{build_router, run_server, ServerConfig};
