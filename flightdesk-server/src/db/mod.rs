//! Database layer - pool, scoped connections, repositories
//!
//! # Design Principles
//!
//! - One leased connection per request, released on drop
//! - One query per operation, JOINs instead of follow-up lookups
//! - Typed records mapped from rows, never raw rows on the wire

pub mod connection;
pub mod pool;
pub mod repos;
pub mod store;

pub use connection::ScopedConnection;
pub use pool::{create_pool, PoolError};
pub use repos::*;
pub use store::{FlightStore, PgFlightStore};
