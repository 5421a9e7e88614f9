//! Ticket repository
//!
//! Passenger lookup joins ticket, flight, both locations and airplane in a
//! single query. Ids are compared as text so any id format is accepted.
//! Flight timestamps are cast to `timestamptz`, so zone-less `timestamp`
//! columns are read in the database session's zone. Joined text columns
//! may be NULL and pass through as `None`.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};

use super::DbError;

const TICKETS_FOR_PASSENGER: &str = r#"
    SELECT
        t.passenger_id::text AS passenger_id,
        t.flight_id::text AS flight_id,
        t.seating_class,
        f.departure_date::timestamptz AS departure_date,
        f.arrival_date::timestamptz AS arrival_date,
        f.origin AS origin_code,
        origin_loc.locationdesc AS origin_airport,
        f.destination AS destination_code,
        destination_loc.locationdesc AS destination_airport,
        a.airplane_name AS airplane,
        a.company AS airline
    FROM ticket t
    JOIN flight f ON t.flight_id = f.flight_id
    JOIN location origin_loc ON f.origin = origin_loc.locationcode
    JOIN location destination_loc ON f.destination = destination_loc.locationcode
    JOIN airplane a ON f.airplane_id = a.airplane_id
    WHERE t.passenger_id::text = $1
"#;

/// Ticket row as selected, before date/time splitting
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TicketRow {
    pub passenger_id: String,
    pub flight_id: String,
    pub seating_class: Option<String>,
    pub departure_date: DateTime<Utc>,
    pub arrival_date: DateTime<Utc>,
    pub origin_code: Option<String>,
    pub origin_airport: Option<String>,
    pub destination_code: Option<String>,
    pub destination_airport: Option<String>,
    pub airplane: Option<String>,
    pub airline: Option<String>,
}

/// Ticket repository
pub struct TicketRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> TicketRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// All tickets held by a passenger. An empty result is not an error.
    pub async fn for_passenger(&mut self, passenger_id: &str) -> Result<Vec<TicketRow>, DbError> {
        let rows = sqlx::query_as::<_, TicketRow>(TICKETS_FOR_PASSENGER)
            .bind(passenger_id)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows)
    }
}
