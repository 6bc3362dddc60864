//! Pair price computation

pub mod price;

pub use price::*;
