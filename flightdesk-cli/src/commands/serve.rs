//! HTTP server command
//!
//! Runs the flightdesk query service: ticket lookup, departures, flight durations.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use flightdesk_server::db::create_pool;
use flightdesk_server::{run_server, ServerConfig, ServiceConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: HOST:PORT from environment, else 0.0.0.0:3000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Only allow localhost origins instead of any origin
    #[arg(long)]
    pub strict_cors: bool,

    /// Database URL (overrides DB_CONNECTION_STRING)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

impl ServeArgs {
    /// `--bind` if given, else the environment's HOST:PORT
    fn resolve_bind(&self, service: &ServiceConfig) -> SocketAddr {
        self.bind.unwrap_or_else(|| service.bind_addr())
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let service = super::load_service_config(args.database_url.clone())?;
    let bind_addr = args.resolve_bind(&service);

    tracing::info!("Starting flightdesk server on {}", bind_addr);

    // Create database pool
    let pool = create_pool(&service)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr,
        cors_permissive: !args.strict_cors,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
