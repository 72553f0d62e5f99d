//! # City Info
//!
//! A catalog of cities and their points of interest, served over HTTP.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - The configured resource store (in-memory or PostgreSQL)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use city_info::config::Settings;
use city_info::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    city_info::telemetry::init_tracing();

    info!("Starting City Info...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        backend = ?settings.store.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
