//! Departures repository
//!
//! Date and time strings come straight from the database session's
//! `to_char`, not from the server's clock settings. Nullable columns
//! serialize as `null`.

use serde::Serialize;
use sqlx::{FromRow, PgConnection};

use super::DbError;

const ALL_DEPARTURES: &str = r#"
    SELECT
        f.flight_id::text AS flight_id,
        to_char(f.departure_date, 'YYYY-MM-DD') AS departure_date,
        to_char(f.departure_date, 'HH24:MI:SS') AS departure_time,
        f.origin,
        f.destination,
        a.company AS airline
    FROM flight f
    JOIN airplane a ON f.airplane_id = a.airplane_id
"#;

/// One row of the departures board
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct DepartureRecord {
    pub flight_id: String,
    pub departure_date: Option<String>,
    pub departure_time: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub airline: Option<String>,
}

/// Departures repository
pub struct DepartureRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> DepartureRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Every flight joined with its airplane's airline, unfiltered.
    pub async fn list(&mut self) -> Result<Vec<DepartureRecord>, DbError> {
        let rows = sqlx::query_as::<_, DepartureRecord>(ALL_DEPARTURES)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows)
    }
}
