//! Custom error types for the price oracle

use alloy::primitives::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("invalid address: {input}")]
    InvalidAddress {
        input: String,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Contract interaction failed: {contract} - {message}")]
    Contract {
        contract: Address,
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Pool {pool} has a zero reserve, price is undefined")]
    ZeroReserves {
        pool: Address,
    },

    #[error("Data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type OracleResult<T> = Result<T, OracleError>;
