//! Database connectivity check

use anyhow::{Context, Result};
use clap::Parser;

use flightdesk_server::db::create_pool;
use flightdesk_server::PgFlightStore;

/// Arguments for the check-db command
#[derive(Parser, Debug)]
pub struct CheckDbArgs {
    /// Database URL (overrides DB_CONNECTION_STRING)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Lease one connection, run `SELECT 1`, report.
pub async fn run_check_db(args: CheckDbArgs) -> Result<()> {
    let service = super::load_service_config(args.database_url)?;
    tracing::debug!(config = ?service, "checking database");

    let pool = create_pool(&service)
        .await
        .context("Failed to create database pool")?;
    let store = PgFlightStore::new(pool);

    let result = store.ping().await.context("Connectivity query failed")?;
    store.pool().close().await;

    println!("database reachable (SELECT 1 returned {})", result);
    Ok(())
}
