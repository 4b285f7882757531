//! Bill calculation
//!
//! Runs the whole pipeline for one call log: parse, resolve the exempt
//! number, price every other call and total the result.

use phonebill_core::{
    models::{BillSummary, RatedCall},
    money::round_money,
    traits::{BillCalculator, RatingService},
    AppResult,
};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::frequency::resolve_exempt_number;
use crate::parser::parse_call_log;
use crate::rating::TariffRatingService;

/// Bill calculator generic over the rating service
#[derive(Debug, Clone, Default)]
pub struct PhoneBillCalculator<R: RatingService = TariffRatingService> {
    rating: R,
}

impl<R: RatingService> PhoneBillCalculator<R> {
    /// Create a new calculator
    pub fn new(rating: R) -> Self {
        Self { rating }
    }
}

impl<R: RatingService> BillCalculator for PhoneBillCalculator<R> {
    #[instrument(skip(self, phone_log), fields(bytes = phone_log.len()))]
    fn calculate(&self, phone_log: &str) -> AppResult<Decimal> {
        let records = parse_call_log(phone_log)?;
        let exempt = resolve_exempt_number(&records)?;

        let total: Decimal = records
            .iter()
            .filter(|record| exempt.as_deref() != Some(record.number.as_str()))
            .map(|record| self.rating.price_call(record))
            .sum();

        let total = round_money(total);
        debug!("Bill total {} for {} calls", total, records.len());
        Ok(total)
    }

    #[instrument(skip(self, phone_log), fields(bytes = phone_log.len()))]
    fn itemize(&self, phone_log: &str) -> AppResult<BillSummary> {
        let records = parse_call_log(phone_log)?;
        let exempt_number = resolve_exempt_number(&records)?;

        let calls: Vec<RatedCall> = records
            .into_iter()
            .map(|record| {
                let exempt = exempt_number.as_deref() == Some(record.number.as_str());
                let cost = if exempt {
                    round_money(Decimal::ZERO)
                } else {
                    self.rating.price_call(&record)
                };
                RatedCall {
                    minutes: record.billable_minutes(),
                    record,
                    cost,
                    exempt,
                }
            })
            .collect();

        let total = round_money(calls.iter().map(|c| c.cost).sum());
        debug!(
            "Itemized bill total {} for {} calls, exempt {:?}",
            total,
            calls.len(),
            exempt_number
        );

        Ok(BillSummary {
            total,
            exempt_number,
            calls,
        })
    }
}

/// Compute the bill for a call log using the standard tariff
pub fn calculate(phone_log: &str) -> AppResult<Decimal> {
    PhoneBillCalculator::<TariffRatingService>::default().calculate(phone_log)
}
