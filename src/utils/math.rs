//! Mathematical utility functions

use rust_decimal::prelude::*;

/// Render a price with exactly 18 fractional digits, the fixed precision the
/// API response uses for both primary ratios.
pub fn format_price_18(price: Decimal) -> String {
    format!("{:.18}", price.round_dp(18))
}
