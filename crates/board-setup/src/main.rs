//! Schema setup entry point
//!
//! Run with:
//! ```bash
//! ADMINPASS=... cargo run -p board-setup -- postgres://localhost/board
//! ```
//!
//! The connection string argument wins over `DATABASE_URL`.

mod cli;

use board_common::{
    try_init_tracing, try_init_tracing_with_config, PasswordService, SetupConfig, TracingConfig,
};
use board_db::{initialize, SeedOutcome};
use clap::Parser;
use tracing::{error, info, warn};

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Load .env before clap reads DATABASE_URL
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match SetupConfig::from_env_with_url(cli.database_url) {
        Ok(config) => config,
        Err(e) => {
            let _ = try_init_tracing();
            error!(error = %e, "No PostgreSQL connection string provided");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Some(value) = &config.rejected_env {
        warn!(app_env = %value, env = ?config.env, "Unrecognized APP_ENV, using default");
    }

    // New hashes use HASH_COST; the initializer logs its own failure and
    // closes its pool either way
    match initialize(&config.database, PasswordService::new()).await {
        Ok(SeedOutcome::AdminCreated(id)) => {
            info!(admin_id = %id, "Database populated (admin only, no messages)");
        }
        Ok(SeedOutcome::AdminAlreadyPresent) => {
            info!("Database populated (admin already present)");
        }
        Err(_) => std::process::exit(1),
    }
}
