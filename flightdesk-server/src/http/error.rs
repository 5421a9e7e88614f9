//! API error types with IntoResponse
//!
//! Errors are converted to responses with appropriate status codes. Body
//! shapes differ per endpoint and are kept that way for existing clients:
//! ticket lookup answers 404 with `message` and 500 with plain text, the
//! other endpoints always answer with a JSON `error` field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// Endpoint a database failure happened in; selects the 500 response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Ticket,
    Departures,
    FlightDuration,
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed input (400)
    Validation(ValidationError),

    /// Passenger has no tickets (404)
    TicketNotFound,

    /// No duration, or a null one, for the route (404)
    DurationNotFound,

    /// Connection or query failure (500, logged)
    Database { endpoint: Endpoint, source: DbError },
}

impl ApiError {
    pub fn database(endpoint: Endpoint, source: DbError) -> Self {
        Self::Database { endpoint, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response(),
            Self::TicketNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "No ticket found for the provided passenger ID" })),
            )
                .into_response(),
            Self::DurationNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "No flight duration found for the given locations" })),
            )
                .into_response(),
            Self::Database { endpoint, source } => {
                // Log the actual error, return generic message
                match endpoint {
                    Endpoint::Ticket => {
                        tracing::error!(error = %source, "Database query error");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Error retrieving ticket details",
                        )
                            .into_response()
                    }
                    Endpoint::Departures => {
                        tracing::error!(error = %source, "Error fetching departure details");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(json!({ "error": "Failed to fetch departure details" })),
                        )
                            .into_response()
                    }
                    Endpoint::FlightDuration => {
                        tracing::error!(error = %source, "Error fetching flight duration");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(json!({
                                "error": "An error occurred while fetching the flight duration"
                            })),
                        )
                            .into_response()
                    }
                }
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
