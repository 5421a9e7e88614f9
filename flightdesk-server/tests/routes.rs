//! Router tests against an in-memory store
//!
//! The store records every call so tests can assert what reached the
//! database layer (and what never did).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use flightdesk_server::db::repos::{DbError, DepartureRecord, FlightDuration, TicketRow};
use flightdesk_server::models::RoutePair;
use flightdesk_server::{build_router, http::AppState, FlightStore, ServerConfig};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Tickets(String),
    Departures,
    Duration { origin: String, destination: String },
}

#[derive(Default)]
struct RecordingStore {
    tickets: Vec<TicketRow>,
    departures: Vec<DepartureRecord>,
    duration: Option<FlightDuration>,
    fail: bool,
    calls: Mutex<Vec<Call>>,
}

impl RecordingStore {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), DbError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(DbError::Acquire(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl FlightStore for RecordingStore {
    async fn tickets_for_passenger(&self, passenger_id: &str) -> Result<Vec<TicketRow>, DbError> {
        self.record(Call::Tickets(passenger_id.to_owned()))?;
        Ok(self
            .tickets
            .iter()
            .filter(|t| t.passenger_id == passenger_id)
            .cloned()
            .collect())
    }

    async fn departures(&self) -> Result<Vec<DepartureRecord>, DbError> {
        self.record(Call::Departures)?;
        Ok(self.departures.clone())
    }

    async fn flight_duration(&self, route: &RoutePair) -> Result<Option<FlightDuration>, DbError> {
        self.record(Call::Duration {
            origin: route.origin.as_str().to_owned(),
            destination: route.destination.as_str().to_owned(),
        })?;
        Ok(self.duration)
    }
}

fn app(store: Arc<RecordingStore>) -> Router {
    build_router(AppState::new(store), &ServerConfig::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn json(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

/// Instant whose wall clock in the server's local zone is the given time.
fn local_instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .earliest()
        .unwrap()
        .with_timezone(&Utc)
}

fn ticket(passenger_id: &str, departure: DateTime<Utc>, arrival: DateTime<Utc>) -> TicketRow {
    TicketRow {
        passenger_id: passenger_id.into(),
        flight_id: "FD204".into(),
        seating_class: Some("business".into()),
        departure_date: departure,
        arrival_date: arrival,
        origin_code: Some("JFK".into()),
        origin_airport: Some("John F. Kennedy International".into()),
        destination_code: Some("LAX".into()),
        destination_airport: Some("Los Angeles International".into()),
        airplane: Some("A321neo".into()),
        airline: Some("Skyline".into()),
    }
}

mod tickets {
    use super::*;

    #[tokio::test]
    async fn splits_departure_in_local_time() {
        let store = Arc::new(RecordingStore {
            tickets: vec![ticket(
                "1001",
                local_instant(2024, 3, 5, 14, 30, 0),
                local_instant(2024, 3, 5, 17, 45, 30),
            )],
            ..RecordingStore::default()
        });

        let (status, body) = get(app(store.clone()), "/ticket/1001").await;
        assert_eq!(status, StatusCode::OK);

        let body = json(&body);
        let tickets = body.as_array().unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0]["passenger_id"], "1001");
        assert_eq!(tickets[0]["departure_date"], "2024-03-05");
        assert_eq!(tickets[0]["departure_time"], "14:30:00");
        assert_eq!(tickets[0]["arrival_date"], "2024-03-05");
        assert_eq!(tickets[0]["arrival_time"], "17:45:30");
        assert_eq!(tickets[0]["seating_class"], "business");
        assert_eq!(store.calls(), vec![Call::Tickets("1001".into())]);
    }

    #[tokio::test]
    async fn returns_every_ticket_for_passenger() {
        let departure = local_instant(2024, 6, 1, 8, 0, 0);
        let arrival = local_instant(2024, 6, 1, 11, 0, 0);
        let store = Arc::new(RecordingStore {
            tickets: vec![
                ticket("77", departure, arrival),
                ticket("77", departure, arrival),
                ticket("78", departure, arrival),
            ],
            ..RecordingStore::default()
        });

        let (status, body) = get(app(store), "/ticket/77").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body).as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_passenger_is_404_for_any_id_format() {
        for id in ["1001", "abc", "00-42", "%20"] {
            let store = Arc::new(RecordingStore::default());
            let (status, body) = get(app(store), &format!("/ticket/{id}")).await;

            assert_eq!(status, StatusCode::NOT_FOUND, "id {id}");
            assert_eq!(
                json(&body),
                json!({ "message": "No ticket found for the provided passenger ID" })
            );
        }
    }

    #[tokio::test]
    async fn passenger_id_is_passed_through_unparsed() {
        let store = Arc::new(RecordingStore::default());
        get(app(store.clone()), "/ticket/P-0042").await;
        assert_eq!(store.calls(), vec![Call::Tickets("P-0042".into())]);
    }

    #[tokio::test]
    async fn database_failure_is_plain_text_500() {
        let (status, body) = get(app(Arc::new(RecordingStore::failing())), "/ticket/1001").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error retrieving ticket details");
    }
}

mod departures {
    use super::*;

    #[tokio::test]
    async fn empty_board_is_200_with_empty_array() {
        let (status, body) = get(app(Arc::new(RecordingStore::default())), "/departures").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body), json!([]));
    }

    #[tokio::test]
    async fn passes_rows_through_unchanged() {
        let store = Arc::new(RecordingStore {
            departures: vec![DepartureRecord {
                flight_id: "FD204".into(),
                departure_date: Some("2024-03-05".into()),
                departure_time: Some("14:30:00".into()),
                origin: Some("JFK".into()),
                destination: Some("LAX".into()),
                airline: Some("Skyline".into()),
            }],
            ..RecordingStore::default()
        });

        let (status, body) = get(app(store.clone()), "/departures").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json(&body),
            json!([{
                "flight_id": "FD204",
                "departure_date": "2024-03-05",
                "departure_time": "14:30:00",
                "origin": "JFK",
                "destination": "LAX",
                "airline": "Skyline"
            }])
        );
        assert_eq!(store.calls(), vec![Call::Departures]);
    }

    #[tokio::test]
    async fn null_columns_serialize_as_null() {
        let store = Arc::new(RecordingStore {
            departures: vec![DepartureRecord {
                flight_id: "415".into(),
                departure_date: Some("2024-03-07".into()),
                departure_time: Some("09:00:00".into()),
                origin: Some("LAX".into()),
                destination: Some("ORD".into()),
                airline: None,
            }],
            ..RecordingStore::default()
        });

        let (status, body) = get(app(store), "/departures").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body)[0]["airline"], Value::Null);
    }

    #[tokio::test]
    async fn database_failure_is_json_500() {
        let (status, body) = get(app(Arc::new(RecordingStore::failing())), "/departures").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json(&body), json!({ "error": "Failed to fetch departure details" }));
    }
}

mod flight_duration {
    use super::*;

    fn with_duration(duration: Option<f64>) -> Arc<RecordingStore> {
        Arc::new(RecordingStore {
            duration: duration.map(FlightDuration),
            ..RecordingStore::default()
        })
    }

    #[tokio::test]
    async fn returns_duration() {
        let store = with_duration(Some(345.0));
        let (status, body) = get(app(store), "/flight-duration?from=jfk&to=lax").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"duration":345}"#);
    }

    #[tokio::test]
    async fn binds_uppercased_codes() {
        let store = with_duration(Some(1.5));
        get(app(store.clone()), "/flight-duration?from=jfk&to=LAX").await;

        assert_eq!(
            store.calls(),
            vec![Call::Duration {
                origin: "JFK".into(),
                destination: "LAX".into()
            }]
        );
    }

    #[tokio::test]
    async fn missing_params_are_400_without_store_access() {
        for uri in [
            "/flight-duration?to=lax",
            "/flight-duration?from=jfk",
            "/flight-duration",
            "/flight-duration?from=&to=lax",
        ] {
            let store = with_duration(Some(345.0));
            let (status, body) = get(app(store.clone()), uri).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(
                json(&body),
                json!({ "error": "Please provide both \"from\" and \"to\" locations" })
            );
            assert!(store.calls().is_empty(), "{uri} reached the store");
        }
    }

    #[tokio::test]
    async fn null_duration_is_404() {
        let (status, body) = get(app(with_duration(None)), "/flight-duration?from=jfk&to=xyz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            json(&body),
            json!({ "error": "No flight duration found for the given locations" })
        );
    }

    #[tokio::test]
    async fn database_failure_is_json_500() {
        let (status, body) = get(
            app(Arc::new(RecordingStore::failing())),
            "/flight-duration?from=jfk&to=lax",
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json(&body),
            json!({ "error": "An error occurred while fetching the flight duration" })
        );
    }
}

#[tokio::test]
async fn health_does_not_touch_store() {
    let store = Arc::new(RecordingStore::failing());
    let (status, body) = get(app(store.clone()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["status"], "ok");
    assert!(store.calls().is_empty());
}
