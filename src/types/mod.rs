//! Shared types and network constants

pub mod addresses;
pub mod price;

pub use addresses::*;
pub use price::*;
