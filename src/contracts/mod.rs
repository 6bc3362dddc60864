//! Raw read-only contract call helpers
//!
//! Each call is a plain `eth_call` built from a keccak-derived selector and
//! decoded with `SolValue`, bounded by the configured per-call timeout.

pub mod pair;
pub mod token;
pub mod factory;

pub use pair::*;
pub use token::*;
pub use factory::*;

use alloy::{
    primitives::{Address, Bytes},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
};
use anyhow::Result;
use std::time::Duration;
use crate::errors::OracleError;

// Timeouts and transport failures surface as `OracleError::Network` so the
// oracle can keep them distinct from per-contract failures when unwrapping
// the chain.
pub(crate) async fn call_contract(
    provider: &dyn Provider,
    to: Address,
    calldata: Vec<u8>,
    timeout: Duration,
) -> Result<Bytes> {
    let tx = TransactionRequest::default()
        .to(to)
        .input(calldata.into());

    let result = tokio::time::timeout(timeout, provider.call(&tx))
        .await
        .map_err(|_| OracleError::Network {
            message: format!("Call to {} timed out after {}s", to, timeout.as_secs()),
            source: None,
        })?
        .map_err(|e| OracleError::Network {
            message: format!("eth_call to {} failed", to),
            source: Some(e.into()),
        })?;

    Ok(result)
}
