//! Ticket lookup endpoint

use std::fmt;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::{Local, SecondsFormat, TimeZone};
use serde::Serialize;

use crate::db::repos::TicketRow;
use crate::http::error::{ApiError, Endpoint};
use crate::http::server::AppState;
use crate::models::split_timestamp;

/// Ticket response: selected columns plus split departure/arrival fields
#[derive(Debug, Serialize)]
pub struct TicketRecord {
    pub passenger_id: String,
    pub flight_id: String,
    pub seating_class: Option<String>,
    pub departure_timestamp: String,
    pub arrival_timestamp: String,
    pub origin_code: Option<String>,
    pub origin_airport: Option<String>,
    pub destination_code: Option<String>,
    pub destination_airport: Option<String>,
    pub airplane: Option<String>,
    pub airline: Option<String>,
    pub departure_date: String,
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
}

impl TicketRecord {
    /// Map a row, splitting timestamps as seen in `zone`.
    pub fn from_row<Tz>(row: TicketRow, zone: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let departure = split_timestamp(&row.departure_date, zone);
        let arrival = split_timestamp(&row.arrival_date, zone);

        Self {
            passenger_id: row.passenger_id,
            flight_id: row.flight_id,
            seating_class: row.seating_class,
            departure_timestamp: row.departure_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            arrival_timestamp: row.arrival_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            origin_code: row.origin_code,
            origin_airport: row.origin_airport,
            destination_code: row.destination_code,
            destination_airport: row.destination_airport,
            airplane: row.airplane,
            airline: row.airline,
            departure_date: departure.date,
            departure_time: departure.time,
            arrival_date: arrival.date,
            arrival_time: arrival.time,
        }
    }
}

/// GET /ticket/{ticket_number} - tickets held by a passenger
async fn get_ticket(
    State(state): State<Arc<AppState>>,
    Path(ticket_number): Path<String>,
) -> Result<Json<Vec<TicketRecord>>, ApiError> {
    let rows = state
        .store
        .tickets_for_passenger(&ticket_number)
        .await
        .map_err(|e| ApiError::database(Endpoint::Ticket, e))?;

    if rows.is_empty() {
        tracing::debug!(passenger_id = %ticket_number, "no tickets found");
        return Err(ApiError::TicketNotFound);
    }

    // Split in the server process's local zone
    let records = rows
        .into_iter()
        .map(|row| TicketRecord::from_row(row, &Local))
        .collect();

    Ok(Json(records))
}

/// Ticket routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/ticket/{ticket_number}", get(get_ticket))
}
