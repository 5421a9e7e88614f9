//! Request-scoped connection lease
//!
//! One connection per request: acquired before the query, handed back to the
//! pool when the guard drops. Dropping covers every exit path, including `?`
//! early returns and panics, so there is no explicit release call to forget.

use std::ops::{Deref, DerefMut};
use std::time::Instant;

use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, PgPool, Postgres};

use super::repos::DbError;

/// A pooled connection owned by a single request.
pub struct ScopedConnection {
    conn: PoolConnection<Postgres>,
    operation: &'static str,
    acquired_at: Instant,
}

impl ScopedConnection {
    /// Acquire a connection for `operation` (used only for log context).
    pub async fn acquire(pool: &PgPool, operation: &'static str) -> Result<Self, DbError> {
        let conn = pool.acquire().await.map_err(DbError::Acquire)?;
        tracing::trace!(operation, "connection acquired");

        Ok(Self {
            conn,
            operation,
            acquired_at: Instant::now(),
        })
    }
}

impl Deref for ScopedConnection {
    type Target = PgConnection;

    fn deref(&self) -> &PgConnection {
        &self.conn
    }
}

impl DerefMut for ScopedConnection {
    fn deref_mut(&mut self) -> &mut PgConnection {
        &mut self.conn
    }
}

impl Drop for ScopedConnection {
    fn drop(&mut self) {
        // PoolConnection's own drop returns the connection (or closes it if broken).
        tracing::trace!(
            operation = self.operation,
            held_ms = self.acquired_at.elapsed().as_millis() as u64,
            "connection released"
        );
    }
}
