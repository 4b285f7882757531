//! Rating service implementation
//!
//! Prices single calls against the fixed time-of-day tariff.

use phonebill_core::{
    models::{CallRecord, Tariff},
    money::round_money,
    traits::RatingService,
};
use rust_decimal::Decimal;
use tracing::trace;

/// Rating service backed by a [`Tariff`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TariffRatingService {
    tariff: Tariff,
}

impl TariffRatingService {
    /// Create a new rating service
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }
}

impl RatingService for TariffRatingService {
    fn price_call(&self, record: &CallRecord) -> Decimal {
        let minutes = record.billable_minutes();
        let cost = round_money(self.tariff.cost_for_minutes(record.start, minutes));

        trace!(
            number = %record.number,
            minutes,
            %cost,
            "Priced call starting {}",
            record.start
        );

        cost
    }
}
