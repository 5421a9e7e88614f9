//! Flight duration lookup via the `get_flight_time` database function

use serde::{Serialize, Serializer};
use sqlx::{FromRow, PgConnection};

use super::DbError;
use crate::models::RoutePair;

// Codes arrive upper-cased already; UPPER() here keeps the query safe on its own.
const FLIGHT_TIME: &str = r#"
    SELECT get_flight_time(UPPER($1), UPPER($2))::double precision AS flight_duration
"#;

/// Largest integer an f64 holds exactly (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, FromRow)]
struct FlightDurationRow {
    flight_duration: Option<f64>,
}

/// Duration computed by the database for a route
///
/// Serializes whole values as JSON integers (`345`, not `345.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightDuration(pub f64);

impl Serialize for FlightDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_EXACT_INT {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

/// Flight time repository
pub struct FlightTimeRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> FlightTimeRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Duration between two locations, `None` when no row or a null value comes back.
    pub async fn duration(&mut self, route: &RoutePair) -> Result<Option<FlightDuration>, DbError> {
        let row = sqlx::query_as::<_, FlightDurationRow>(FLIGHT_TIME)
            .bind(route.origin.as_str())
            .bind(route.destination.as_str())
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(row
            .and_then(|r| r.flight_duration)
            .map(FlightDuration))
    }
}
