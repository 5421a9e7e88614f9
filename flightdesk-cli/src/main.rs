//! flightdesk CLI - flight booking query service
//!
//! Entry point for the `flightdesk` binary:
//! - `serve`: run the HTTP API (tickets, departures, flight durations)
//! - `check-db`: verify database credentials and connectivity

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "flightdesk",
    author,
    version,
    about = "Read-only HTTP query service for flight bookings"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Check database connectivity with the configured credentials
    CheckDb(commands::check_db::CheckDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be set
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::CheckDb(args) => commands::run_check_db(args).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn debug_flag_is_global() {
        let cli = Cli::parse_from(["flightdesk", "serve", "--debug"]);
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Serve(_)));
    }

    #[test]
    fn check_db_subcommand_is_kebab_case() {
        let cli = Cli::parse_from(["flightdesk", "check-db"]);
        assert!(matches!(cli.command, Commands::CheckDb(_)));
    }
}
