//! LP Price Oracle - spot price API for constant-product AMM pairs
//!
//! Queries an Ethereum JSON-RPC node for a liquidity pair's tokens, decimals
//! and reserves, derives the pair's relative price plus a USD cross price
//! against a reference stablecoin, and serves the result over a single HTTP
//! endpoint.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod contracts;
pub mod oracle;
pub mod server;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{OracleError, OracleResult};
pub use oracle::PriceOracle;
pub use types::*;

// Type alias for our concrete provider
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;
