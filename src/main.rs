//! HTTP server for the tool rental engine.
//!
//! Reads the catalog directory from `TOOL_RENTAL_CONFIG_DIR` (default
//! `./config/catalog`) and listens on `TOOL_RENTAL_BIND` (default
//! `127.0.0.1:3000`). Log verbosity follows `RUST_LOG`.

use std::env;

use tokio::net::TcpListener;
use tool_rental::api::{AppState, create_router};
use tool_rental::checkout::CheckoutService;
use tool_rental::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/catalog";
const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tool_rental=info")),
        )
        .init();

    let config_dir = env::var("TOOL_RENTAL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind = env::var("TOOL_RENTAL_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        tools = ?config.catalog().codes(),
        "Configuration loaded"
    );

    let state = AppState::new(CheckoutService::from_config(config));
    let listener = TcpListener::bind(&bind).await?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
