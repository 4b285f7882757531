//! Currency rounding
//!
//! Amounts are carried as `Decimal` and rounded to two fractional digits,
//! half-up, at every rounding step of the billing pipeline.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits in a billed amount
pub const MONEY_SCALE: u32 = 2;

/// Round an amount to two fractional digits using round-half-up
///
/// The result always has a scale of exactly two, so `5` is rendered as
/// `"5.00"`.
#[inline]
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}
