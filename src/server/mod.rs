//! HTTP surface for the price oracle

pub mod routes;

pub use routes::*;
