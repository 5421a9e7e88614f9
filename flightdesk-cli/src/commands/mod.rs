//! Command implementations for flightdesk CLI

pub mod check_db;
pub mod serve;

pub use check_db::run_check_db;
pub use serve::run_serve;

use anyhow::{Context, Result};
use flightdesk_server::ServiceConfig;

/// Load service config from the environment, with an optional URL override.
pub(crate) fn load_service_config(database_url: Option<String>) -> Result<ServiceConfig> {
    let config = match database_url {
        Some(url) => ServiceConfig::from_lookup(|key| match key {
            "DB_CONNECTION_STRING" => Some(url.clone()),
            _ => std::env::var(key).ok(),
        }),
        None => ServiceConfig::from_env(),
    };

    config.context(
        "Invalid configuration. Set DB_CONNECTION_STRING (or --database-url) in the environment or .env",
    )
}
