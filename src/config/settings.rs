//! Service configuration and environment variable handling

use alloy::primitives::Address;
use std::env;
use std::str::FromStr;
use crate::types::{UNISWAP_V2_FACTORY, USDT_MAINNET};

// Configuration constants
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RPC_URL: &str = "https://eth.llamarpc.com";
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 10;
pub const MAX_RPC_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub stablecoin_address: Address,
    pub factory_address: Address,
    pub port: u16,
    pub rpc_timeout_secs: u64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            rpc_url: env::var("RPC_URL")
                .unwrap_or_else(|_| DEFAULT_RPC_URL.to_string()),
            stablecoin_address: env::var("STABLECOIN_ADDRESS")
                .ok()
                .and_then(|s| Address::from_str(&s).ok())
                .unwrap_or(USDT_MAINNET),
            factory_address: env::var("FACTORY_ADDRESS")
                .ok()
                .and_then(|s| Address::from_str(&s).ok())
                .unwrap_or(UNISWAP_V2_FACTORY),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            rpc_timeout_secs: env::var("RPC_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_RPC_TIMEOUT_SECS)
                .clamp(1, MAX_RPC_TIMEOUT_SECS),
        }
    }
}
