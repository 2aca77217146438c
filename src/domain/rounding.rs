//! The single rounding rule used for every displayed number.
//!
//! All rounding is half away from zero on `Decimal` values, so the same
//! inputs always render the same digits.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for EV and win-probability percentages.
pub const PERCENT_DP: u32 = 1;

/// Decimal places for stakes and payouts.
pub const MONEY_DP: u32 = 2;

/// Round `value` to `dp` decimal places, ties away from zero.
#[must_use]
pub fn round_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
