//! HTTP server for the Timesheet Engine.
//!
//! `TIMESHEET_CONFIG_DIR` selects the configuration directory (default
//! `./config/timesheet`) and `TIMESHEET_BIND` the listen address (default
//! `127.0.0.1:3000`).

use std::env;

use timesheet_engine::api::{create_router, AppState};
use timesheet_engine::config::ConfigLoader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/timesheet";
const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timesheet_engine=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        env::var("TIMESHEET_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind = env::var("TIMESHEET_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());

    let config = ConfigLoader::load(&config_dir).inspect_err(|err| {
        tracing::error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
    })?;
    tracing::info!(
        config_dir = %config_dir,
        grades = config.config().grades().len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(address = %bind, "Starting timesheet engine");

    axum::serve(listener, router).await?;
    Ok(())
}
