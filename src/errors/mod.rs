//! Error types for the oracle

pub mod oracle_error;

pub use oracle_error::*;
