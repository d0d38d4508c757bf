//! Staking stats board - Main executable
//!
//! This is the entry point for the web application that renders staking
//! statistics for the Shadowy Super Coder collection, one page of twelve
//! listed tokens at a time, with buy links to the marketplace.
use anyhow::Context;
use dotenv::dotenv;
use log::info;
use ssc_stake_board::{create_router, create_solana_client, Config, ServiceContainer};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting SSC stake board v{}", ssc_stake_board::VERSION);

    // Load and validate environment variables
    let config = Config::from_env()?;

    // Initialize Solana client
    info!("Connecting to Solana network...");
    let solana_client =
        create_solana_client(&config.rpc_url).context("Failed to create Solana client")?;

    // Wire up application services
    let bind_addr = config.bind_addr.clone();
    let services = Arc::new(
        ServiceContainer::new(config, solana_client)
            .context("Failed to initialize services")?,
    );

    let app = create_router(services);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    info!("Listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
