//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows one request-scoped connection, never the pool
//! - Runs exactly one parameterized query
//! - Maps rows into typed records only after the full fetch succeeds

pub mod departures;
pub mod flight_time;
pub mod tickets;

pub use departures::{DepartureRecord, DepartureRepo};
pub use flight_time::{FlightDuration, FlightTimeRepo};
pub use tickets::{TicketRepo, TicketRow};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("failed to acquire connection: {0}")]
    Acquire(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Query(#[from] sqlx::Error),
}
