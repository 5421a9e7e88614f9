//! HTTP server layer
//!
//! Axum server with:
//! - CORS (permissive by default, localhost-only on request)
//! - Request tracing
//! - Graceful shutdown
//! - Per-endpoint error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::{ApiError, Endpoint};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
