//! Departures board endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::DepartureRecord;
use crate::http::error::{ApiError, Endpoint};
use crate::http::server::AppState;

/// GET /departures - every flight with its database-formatted departure
async fn list_departures(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DepartureRecord>>, ApiError> {
    let departures = state
        .store
        .departures()
        .await
        .map_err(|e| ApiError::database(Endpoint::Departures, e))?;

    Ok(Json(departures))
}

/// Departure routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/departures", get(list_departures))
}
