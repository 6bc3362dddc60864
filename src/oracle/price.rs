//! Spot price derivation from pair reserves
//!
//! The remote-read sequence mirrors the pool contract's data dependencies:
//! token addresses first, then decimals (concurrent), then reserves. The USD
//! cross-price lookups run concurrently once the primary ratios are known and
//! degrade to `None` on failure instead of aborting the request.

use alloy::primitives::{Address, U256};
use rust_decimal::prelude::*;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use crate::{
    config::Config,
    contracts::{factory, pair, token},
    errors::{OracleError, OracleResult},
    types::PairPrice,
    utils::format_price_18,
    ConcreteProvider,
};

#[derive(Clone)]
pub struct PriceOracle {
    provider: Arc<ConcreteProvider>,
    stablecoin: Address,
    factory: Address,
    call_timeout: Duration,
}

impl PriceOracle {
    pub fn new(provider: Arc<ConcreteProvider>, config: &Config) -> Self {
        Self {
            provider,
            stablecoin: config.stablecoin_address,
            factory: config.factory_address,
            call_timeout: Duration::from_secs(config.rpc_timeout_secs),
        }
    }

    /// Compute both relative prices for the pair at `pool`, plus each token's
    /// price against the reference stablecoin. Any failure on the primary
    /// path aborts the whole computation; no partial result is returned.
    pub async fn get_pair_price(&self, pool: Address) -> OracleResult<PairPrice> {
        let provider = self.provider.as_ref();

        let (token0, token1) = pair::get_pair_tokens(provider, pool, self.call_timeout)
            .await
            .map_err(|e| wrap_contract_error(pool, "Failed to fetch pair tokens", e))?;

        let (decimals0, decimals1) = tokio::try_join!(
            token::get_token_decimals(provider, token0, self.call_timeout),
            token::get_token_decimals(provider, token1, self.call_timeout),
        )
        .map_err(|e| wrap_contract_error(pool, "Failed to fetch token decimals", e))?;

        let (reserve0, reserve1) = pair::get_pair_reserves(provider, pool, self.call_timeout)
            .await
            .map_err(|e| wrap_contract_error(pool, "Failed to fetch reserves", e))?;

        let (price0to1, price1to0) =
            pair_price_from_reserves(pool, reserve0, reserve1, decimals0, decimals1)?;

        debug!(
            "Pool {}: {} / {} -> {} per token0",
            pool, token0, token1, price0to1
        );

        let (usd0, usd1) = tokio::join!(
            self.get_token_price_vs_stable(token0),
            self.get_token_price_vs_stable(token1),
        );

        Ok(PairPrice {
            token0,
            token1,
            price: format_price_18(price0to1),
            inverse_price: format_price_18(price1to0),
            price_token0_in_usdt: usd0,
            price_token1_in_usdt: usd1,
        })
    }

    /// Price `token` against the reference stablecoin via its direct factory
    /// pool. A missing pool is an expected outcome and yields `None`; remote
    /// failures are absorbed here so the caller's response still goes out.
    pub async fn get_token_price_vs_stable(&self, token: Address) -> Option<f64> {
        match self.fetch_stable_price(token).await {
            Ok(Some(price)) => price.to_f64(),
            Ok(None) => {
                debug!("No stablecoin pool found for {}", token);
                None
            }
            Err(e) => {
                warn!("Stablecoin price lookup failed for {}: {}", token, e);
                None
            }
        }
    }

    /// Finer-grained stable lookup: `Ok(None)` means the factory has no pool
    /// for this token, `Err` means a remote call or decode failed.
    async fn fetch_stable_price(&self, token: Address) -> OracleResult<Option<Decimal>> {
        let provider = self.provider.as_ref();

        let stable_pool = factory::get_pair_for(
            provider,
            self.factory,
            self.stablecoin,
            token,
            self.call_timeout,
        )
        .await
        .map_err(|e| wrap_contract_error(self.factory, "Failed to query factory for stablecoin pool", e))?;

        if stable_pool == Address::ZERO {
            return Ok(None);
        }

        let (token0, token1) = pair::get_pair_tokens(provider, stable_pool, self.call_timeout)
            .await
            .map_err(|e| wrap_contract_error(stable_pool, "Failed to fetch stablecoin pool tokens", e))?;

        let (decimals0, decimals1) = tokio::try_join!(
            token::get_token_decimals(provider, token0, self.call_timeout),
            token::get_token_decimals(provider, token1, self.call_timeout),
        )
        .map_err(|e| wrap_contract_error(stable_pool, "Failed to fetch stablecoin pool decimals", e))?;

        let (reserve0, reserve1) =
            pair::get_pair_reserves(provider, stable_pool, self.call_timeout)
                .await
                .map_err(|e| wrap_contract_error(stable_pool, "Failed to fetch stablecoin pool reserves", e))?;

        let price = stable_price_from_reserves(
            stable_pool,
            token,
            token0,
            reserve0,
            decimals0,
            reserve1,
            decimals1,
        )?;

        Ok(Some(price))
    }
}

// Remote-call failures raised as `OracleError::Network` inside the anyhow
// chain keep their class; everything else becomes a `Contract` failure tied
// to the contract being read.
fn wrap_contract_error(contract: Address, message: &str, source: anyhow::Error) -> OracleError {
    match source.downcast::<OracleError>() {
        Ok(err) => err,
        Err(source) => OracleError::Contract {
            contract,
            message: message.to_string(),
            source,
        },
    }
}

/// Compute `(price0to1, price1to0)` from raw reserves and token decimals.
/// Zero reserves on either side make the price undefined and fail the
/// computation outright.
pub fn pair_price_from_reserves(
    pool: Address,
    reserve0: U256,
    reserve1: U256,
    decimals0: u8,
    decimals1: u8,
) -> OracleResult<(Decimal, Decimal)> {
    let (scaled0, scaled1) = scaled_reserves(pool, reserve0, decimals0, reserve1, decimals1)?;
    Ok((scaled1 / scaled0, scaled0 / scaled1))
}

/// Price `token` in stablecoin units from its pool against the stablecoin:
/// the other side's scaled reserve over this token's scaled reserve.
pub fn stable_price_from_reserves(
    pool: Address,
    token: Address,
    token0: Address,
    reserve0: U256,
    decimals0: u8,
    reserve1: U256,
    decimals1: u8,
) -> OracleResult<Decimal> {
    let (scaled0, scaled1) = scaled_reserves(pool, reserve0, decimals0, reserve1, decimals1)?;

    if token0 == token {
        Ok(scaled1 / scaled0)
    } else {
        Ok(scaled0 / scaled1)
    }
}

fn scaled_reserves(
    pool: Address,
    reserve0: U256,
    decimals0: u8,
    reserve1: U256,
    decimals1: u8,
) -> OracleResult<(Decimal, Decimal)> {
    if reserve0 == U256::from(0) || reserve1 == U256::from(0) {
        return Err(OracleError::ZeroReserves { pool });
    }

    let scaled0 = scale_reserve(reserve0, decimals0)?;
    let scaled1 = scale_reserve(reserve1, decimals1)?;

    // Scaling must not have collapsed a reserve to zero.
    if scaled0.is_zero() || scaled1.is_zero() {
        return Err(OracleError::ZeroReserves { pool });
    }

    Ok((scaled0, scaled1))
}

// Decimal carries at most 28 fractional digits, which bounds the token
// decimal counts we can scale by (ERC20 tokens sit at 0-18 in practice).
const MAX_TOKEN_DECIMALS: u8 = 28;

fn scale_reserve(raw: U256, decimals: u8) -> OracleResult<Decimal> {
    if decimals > MAX_TOKEN_DECIMALS {
        return Err(OracleError::DataParsing {
            context: format!("Unsupported token decimal count: {}", decimals),
            source: anyhow::anyhow!("decimal count exceeds supported precision"),
        });
    }

    // Shift the decimal point in the digit string before parsing so raw
    // reserves larger than Decimal's mantissa still scale whenever the
    // scaled value itself is representable. Excess fractional digits are
    // rounded by `from_str`.
    let digits = raw.to_string();
    let decimals = decimals as usize;
    let shifted = if decimals == 0 {
        digits
    } else if digits.len() > decimals {
        let (int_part, frac_part) = digits.split_at(digits.len() - decimals);
        format!("{}.{}", int_part, frac_part)
    } else {
        format!("0.{:0>width$}", digits, width = decimals)
    };

    Decimal::from_str(&shifted).map_err(|e| OracleError::DataParsing {
        context: format!("Reserve {} exceeds supported precision after scaling", raw),
        source: e.into(),
    })
}
