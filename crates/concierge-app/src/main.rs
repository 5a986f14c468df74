//! Concierge application binary - composition root.
//!
//! Ties the crates together into a single executable:
//! 1. Parse CLI args and initialize tracing
//! 2. Load configuration from TOML
//! 3. Build the room registry, inventory client, and message handler
//! 4. Serve the health endpoint
//! 5. Run the chat dispatch loop over the configured transport

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use clap::Parser;

use concierge_chat::{run_dispatch, ChatTransport, MessageHandler, RoomRegistry};
use concierge_core::ConciergeConfig;
use concierge_inventory::HttpInventoryClient;

mod cli;
mod stdio;

/// GET / - static confirmation that the bot process is up.
async fn health() -> &'static str {
    "Concierge bot is running."
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();

    // Tracing: RUST_LOG wins, then the resolved log level.
    let default_level = args.resolve_log_level("info");
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    tracing::info!("Starting concierge v{}", env!("CARGO_PKG_VERSION"));

    // Config.
    let config_file = args.resolve_config_path();
    let config = ConciergeConfig::load_or_default(&config_file);
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Room registry: built-ins plus any [rooms] entries from config.
    let registry = Arc::new(RoomRegistry::with_entries(config.rooms.clone()));
    tracing::info!(rooms = registry.len(), "Room registry ready");

    // Inventory client.
    let inventory_url = args.resolve_inventory_url(&config.inventory.endpoint);
    let client = HttpInventoryClient::new(inventory_url.clone())
        .with_timeout(Duration::from_secs(config.inventory.timeout_secs));
    tracing::info!(endpoint = %inventory_url, "Inventory client ready");

    // Message handler shared across all message tasks.
    let handler = Arc::new(MessageHandler::new(registry, Arc::new(client)));

    // Health endpoint.
    let port = args.resolve_port(config.server.port);
    let addr = format!("127.0.0.1:{}", port);
    let router = Router::new().route("/", get(health));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "Failed to bind — is another instance running?");
            return Err(e.into());
        }
    };
    tracing::info!(addr = %addr, "Health endpoint listening");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!(error = %e, "Health server error");
        }
    });

    // Chat dispatch loop; runs until the transport's inbound stream closes.
    let transport: Arc<dyn ChatTransport> = Arc::new(stdio::StdioTransport::new());
    run_dispatch(transport, handler, config.chat.max_in_flight).await;

    Ok(())
}
