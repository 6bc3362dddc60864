//! LP Price Oracle - Main Entry Point
//!
//! HTTP API serving AMM pair spot prices from an Ethereum JSON-RPC node

use lp_price_oracle::*;
use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    let _logging_guard = utils::setup_logging()?;

    // Load configuration
    let config = CONFIG.clone();

    info!("🔮 LP Price Oracle v0.1.0");
    info!("📋 Configuration:");
    info!("   RPC URL: {}", config.rpc_url);
    info!("   Reference stablecoin: {}", config.stablecoin_address);
    info!("   AMM factory: {}", config.factory_address);
    info!("   RPC call timeout: {}s", config.rpc_timeout_secs);

    // Setup network provider and oracle
    let provider = network::setup_provider(&config).await?;
    let oracle = PriceOracle::new(provider, &config);

    let app = server::router(server::AppState { oracle });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("🚀 Server running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("🛑 Shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
    info!("\n📛 Received shutdown signal (Ctrl+C)...");
}
