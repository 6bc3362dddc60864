//! Liquidity pair contract reads

use alloy::{
    primitives::{Address, keccak256, U256},
    providers::Provider,
    sol_types::SolValue,
};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;
use super::call_contract;

/// Fetch `token0()` and `token1()` from a pair contract. The two reads are
/// independent and issued concurrently.
pub async fn get_pair_tokens(
    provider: &dyn Provider,
    pair: Address,
    timeout: Duration,
) -> Result<(Address, Address)> {
    debug!("Fetching constituent tokens for pair {}", pair);

    let token0_data = keccak256("token0()")[..4].to_vec();
    let token1_data = keccak256("token1()")[..4].to_vec();

    let (raw0, raw1) = tokio::try_join!(
        call_contract(provider, pair, token0_data, timeout),
        call_contract(provider, pair, token1_data, timeout),
    )
    .context("Failed to fetch pair tokens")?;

    let token0 = Address::abi_decode(&raw0, true)
        .context("Failed to decode token0")?;
    let token1 = Address::abi_decode(&raw1, true)
        .context("Failed to decode token1")?;

    Ok((token0, token1))
}

/// Fetch the pair's current reserves via `getReserves()`. The contract
/// returns `(uint112, uint112, uint32)`; the trailing block timestamp is
/// discarded.
pub async fn get_pair_reserves(
    provider: &dyn Provider,
    pair: Address,
    timeout: Duration,
) -> Result<(U256, U256)> {
    let data = keccak256("getReserves()")[..4].to_vec();

    let raw = call_contract(provider, pair, data, timeout)
        .await
        .context("Failed to call getReserves")?;
    let decoded = <(U256, U256, U256)>::abi_decode(&raw, true)
        .context("Failed to decode reserves")?;

    Ok((decoded.0, decoded.1))
}

#[cfg(test)]
mod tests {
    use alloy::primitives::keccak256;

    #[test]
    fn pair_selectors_match_known_signatures() {
        assert_eq!(&keccak256("token0()")[..4], &[0x0d, 0xfe, 0x16, 0x81]);
        assert_eq!(&keccak256("token1()")[..4], &[0xd2, 0x12, 0x20, 0xa7]);
        assert_eq!(&keccak256("getReserves()")[..4], &[0x09, 0x02, 0xf1, 0xac]);
    }
}
