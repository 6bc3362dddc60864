//! Ethereum mainnet contract addresses

use alloy::primitives::{Address, address};

// Reference stablecoin (USDT, 6 decimals), assumed pegged 1:1 to USD
pub const USDT_MAINNET: Address = address!("dAC17F958D2ee523a2206206994597C13D831ec7");

// Uniswap V2 factory, maps a token pair to its liquidity pool contract
pub const UNISWAP_V2_FACTORY: Address = address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");
