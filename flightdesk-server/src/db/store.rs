//! Flight store - the seam between HTTP handlers and the database
//!
//! Each operation leases its own connection, runs one repository query and
//! drops the lease before returning. Handlers hold an `Arc<dyn FlightStore>`
//! so tests can swap in an in-memory store.

use async_trait::async_trait;
use sqlx::PgPool;

use super::connection::ScopedConnection;
use super::repos::{
    DbError, DepartureRecord, DepartureRepo, FlightDuration, FlightTimeRepo, TicketRepo, TicketRow,
};
use crate::models::RoutePair;

/// Read-only access to the flight-booking dataset
#[async_trait]
pub trait FlightStore: Send + Sync {
    /// Tickets for a passenger id (opaque string). Empty when none match.
    async fn tickets_for_passenger(&self, passenger_id: &str) -> Result<Vec<TicketRow>, DbError>;

    /// Full departures board.
    async fn departures(&self) -> Result<Vec<DepartureRecord>, DbError>;

    /// Computed duration for a route, `None` when the database has none.
    async fn flight_duration(&self, route: &RoutePair) -> Result<Option<FlightDuration>, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgFlightStore {
    pool: PgPool,
}

impl PgFlightStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip `SELECT 1` on a leased connection.
    pub async fn ping(&self) -> Result<i32, DbError> {
        let mut conn = ScopedConnection::acquire(&self.pool, "ping").await?;
        let (one,): (i32,) = sqlx::query_as("SELECT 1").fetch_one(&mut *conn).await?;
        Ok(one)
    }
}

#[async_trait]
impl FlightStore for PgFlightStore {
    async fn tickets_for_passenger(&self, passenger_id: &str) -> Result<Vec<TicketRow>, DbError> {
        let mut conn = ScopedConnection::acquire(&self.pool, "tickets_for_passenger").await?;
        TicketRepo::new(&mut conn).for_passenger(passenger_id).await
    }

    async fn departures(&self) -> Result<Vec<DepartureRecord>, DbError> {
        let mut conn = ScopedConnection::acquire(&self.pool, "departures").await?;
        DepartureRepo::new(&mut conn).list().await
    }

    async fn flight_duration(&self, route: &RoutePair) -> Result<Option<FlightDuration>, DbError> {
        let mut conn = ScopedConnection::acquire(&self.pool, "flight_duration").await?;
        FlightTimeRepo::new(&mut conn).duration(route).await
    }
}
