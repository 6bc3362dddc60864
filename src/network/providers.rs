//! Network provider setup

use alloy::providers::{Provider, ProviderBuilder};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use crate::{config::Config, ConcreteProvider};

pub async fn setup_provider(config: &Config) -> Result<Arc<ConcreteProvider>> {
    let provider: Arc<ConcreteProvider> = Arc::new(
        ProviderBuilder::new()
            .on_http(config.rpc_url.parse().context("Invalid RPC URL")?)
            .boxed()
    );

    info!("🔗 Testing connection to RPC endpoint...");
    let block = tokio::time::timeout(
        Duration::from_secs(config.rpc_timeout_secs),
        provider.get_block_number(),
    )
    .await
    .context("RPC connection test timed out")?
    .context("Failed to get block number")?;

    info!("✅ Connected to chain at block {}", block);
    Ok(provider)
}
