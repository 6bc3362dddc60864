//! ERC20 token metadata reads

use alloy::{
    primitives::{Address, keccak256, U256},
    providers::Provider,
    sol_types::SolValue,
};
use anyhow::{Context, Result};
use std::time::Duration;
use super::call_contract;

pub async fn get_token_decimals(
    provider: &dyn Provider,
    token: Address,
    timeout: Duration,
) -> Result<u8> {
    let data = keccak256("decimals()")[..4].to_vec();

    let raw = call_contract(provider, token, data, timeout)
        .await
        .with_context(|| format!("Failed to call decimals on {}", token))?;

    decode_decimals(&raw)
}

// `decimals()` returns a single left-padded word; alloy has no `SolValue`
// impl for `u8`, so decode the word as `U256` and narrow.
fn decode_decimals(raw: &[u8]) -> Result<u8> {
    let value = U256::abi_decode(raw, true)
        .context("Failed to decode decimals")?;

    u8::try_from(value)
        .map_err(|_| anyhow::anyhow!("Decimals value {} does not fit in u8", value))
}

pub async fn get_token_symbol(
    provider: &dyn Provider,
    token: Address,
    timeout: Duration,
) -> Result<String> {
    let data = keccak256("symbol()")[..4].to_vec();

    let raw = call_contract(provider, token, data, timeout)
        .await
        .with_context(|| format!("Failed to call symbol on {}", token))?;

    String::abi_decode(&raw, true)
        .context("Failed to decode symbol")
}
