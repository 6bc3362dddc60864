//! AMM factory contract reads

use alloy::{
    primitives::{Address, keccak256},
    providers::Provider,
    sol_types::SolValue,
};
use anyhow::{Context, Result};
use std::time::Duration;
use super::call_contract;

/// Look up the pool pairing `token_a` with `token_b` via
/// `getPair(address,address)`. The factory returns the zero address when no
/// such pool has been created.
pub async fn get_pair_for(
    provider: &dyn Provider,
    factory: Address,
    token_a: Address,
    token_b: Address,
    timeout: Duration,
) -> Result<Address> {
    let mut data = keccak256("getPair(address,address)")[..4].to_vec();
    data.extend_from_slice(&(token_a, token_b).abi_encode_params());

    let raw = call_contract(provider, factory, data, timeout)
        .await
        .context("Failed to call getPair")?;

    Address::abi_decode(&raw, true)
        .context("Failed to decode pair address")
}
