//! Activity Signup Server
//!
//! Serves the Mergington High School activity catalog and signup API.

use activity_signup::{server, ServerConfig};
use anyhow::Result;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("Starting Activity Signup Server");
    info!("  Listening on: {}", config.bind_addr());
    info!("  Static dir: {}", config.static_dir.display());
    match &config.catalog {
        Some(path) => info!("  Catalog: {}", path.display()),
        None => info!("  Catalog: built-in"),
    }
    info!(
        "  Capacity: {}",
        if config.enforce_capacity {
            "enforced"
        } else {
            "not enforced"
        }
    );

    server::run(config).await
}
