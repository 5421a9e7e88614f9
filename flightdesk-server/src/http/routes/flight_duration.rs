//! Flight duration endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::FlightDuration;
use crate::http::error::{ApiError, Endpoint};
use crate::http::server::AppState;
use crate::models::{RouteParams, RoutePair};

/// Duration response
#[derive(Debug, Serialize)]
pub struct DurationResponse {
    pub duration: FlightDuration,
}

/// GET /flight-duration?from=..&to=.. - duration between two locations
async fn get_flight_duration(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RouteParams>,
) -> Result<Json<DurationResponse>, ApiError> {
    // Validated before any connection is leased
    let route = RoutePair::try_from(params)?;

    let duration = state
        .store
        .flight_duration(&route)
        .await
        .map_err(|e| ApiError::database(Endpoint::FlightDuration, e))?
        .ok_or(ApiError::DurationNotFound)?;

    Ok(Json(DurationResponse { duration }))
}

/// Flight duration routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/flight-duration", get(get_flight_duration))
}
