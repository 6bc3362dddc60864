//! Utility functions and helpers

pub mod math;
pub mod logging;

pub use math::*;
pub use logging::*;
