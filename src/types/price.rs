//! Price result types returned by the oracle

use alloy::primitives::Address;
use serde::Serialize;

/// Computed spot prices for one liquidity pair.
///
/// `price` is token0 priced in token1 and `inverse_price` the reciprocal,
/// both rendered with exactly 18 fractional digits. The USD fields are
/// `None` when no direct stablecoin pair exists for that token or when the
/// cross-price lookup failed.
#[derive(Debug, Clone, Serialize)]
pub struct PairPrice {
    pub token0: Address,
    pub token1: Address,
    pub price: String,
    #[serde(rename = "inversePrice")]
    pub inverse_price: String,
    #[serde(rename = "priceToken0InUSDT")]
    pub price_token0_in_usdt: Option<f64>,
    #[serde(rename = "priceToken1InUSDT")]
    pub price_token1_in_usdt: Option<f64>,
}
