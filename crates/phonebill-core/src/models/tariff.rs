//! Tariff model
//!
//! Per-minute rates by time of day. A call's first minutes are priced by
//! the hour in which each minute starts; every minute after that is priced
//! at the flat discounted rate.

use chrono::{Duration, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rate per minute inside the standard window
pub const STANDARD_RATE: Decimal = dec!(1.0);

/// Rate per minute outside the standard window
pub const OFF_PEAK_RATE: Decimal = dec!(0.5);

/// Rate per minute for every minute past the discount threshold
pub const DISCOUNTED_RATE: Decimal = dec!(0.2);

/// First hour of the standard window (inclusive)
pub const STANDARD_WINDOW_START: u32 = 8;

/// Last hour of the standard window (exclusive)
pub const STANDARD_WINDOW_END: u32 = 16;

/// Minutes priced by time of day before the discounted rate applies
pub const DISCOUNT_AFTER_MINUTES: i64 = 5;

/// Tariff
///
/// Fixed for the whole process; use [`Tariff::STANDARD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tariff {
    pub standard_rate: Decimal,
    pub off_peak_rate: Decimal,
    pub discounted_rate: Decimal,
    pub window_start_hour: u32,
    pub window_end_hour: u32,
    pub discount_after_minutes: i64,
}

impl Tariff {
    pub const STANDARD: Tariff = Tariff {
        standard_rate: STANDARD_RATE,
        off_peak_rate: OFF_PEAK_RATE,
        discounted_rate: DISCOUNTED_RATE,
        window_start_hour: STANDARD_WINDOW_START,
        window_end_hour: STANDARD_WINDOW_END,
        discount_after_minutes: DISCOUNT_AFTER_MINUTES,
    };

    /// Check if an hour of day falls in the half-open standard window
    #[inline]
    pub fn is_standard_hour(&self, hour: u32) -> bool {
        hour >= self.window_start_hour && hour < self.window_end_hour
    }

    /// Rate for the minute at `index` (0-based) of a call starting at `start`
    pub fn rate_for_minute(&self, start: NaiveDateTime, index: i64) -> Decimal {
        if index >= self.discount_after_minutes {
            return self.discounted_rate;
        }

        let minute_start = start + Duration::minutes(index);
        if self.is_standard_hour(minute_start.hour()) {
            self.standard_rate
        } else {
            self.off_peak_rate
        }
    }

    /// Unrounded cost of `minutes` billable minutes starting at `start`
    ///
    /// Only the time-of-day priced minutes are walked; the discounted tail
    /// is a single multiplication.
    pub fn cost_for_minutes(&self, start: NaiveDateTime, minutes: i64) -> Decimal {
        if minutes <= 0 {
            return Decimal::ZERO;
        }

        let priced_by_hour = minutes.min(self.discount_after_minutes);
        let head: Decimal = (0..priced_by_hour)
            .map(|i| self.rate_for_minute(start, i))
            .sum();

        let tail_minutes = minutes - priced_by_hour;
        head + Decimal::from(tail_minutes) * self.discounted_rate
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::STANDARD
    }
}
