//! Bill models
//!
//! Result of pricing a whole call log, with per-call detail.

use rust_decimal::Decimal;
use serde::Serialize;

use super::CallRecord;

/// A call record together with its billed cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedCall {
    #[serde(flatten)]
    pub record: CallRecord,

    /// Billable minutes (duration rounded up)
    pub minutes: i64,

    /// Cost of the call, rounded to two digits. Zero when exempt.
    pub cost: Decimal,

    /// The call was to the exempt number and is free
    pub exempt: bool,
}

/// Itemized bill for one call log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillSummary {
    /// Total amount due, rounded to two digits
    pub total: Decimal,

    /// Number excluded from billing (None for an empty log)
    pub exempt_number: Option<String>,

    /// Calls in log order
    pub calls: Vec<RatedCall>,
}

impl BillSummary {
    /// Number of calls in the log
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Number of calls that were charged
    pub fn billed_call_count(&self) -> usize {
        self.calls.iter().filter(|c| !c.exempt).count()
    }
}
