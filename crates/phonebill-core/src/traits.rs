//! Common traits for services
//!
//! Defines the abstractions the billing pipeline is built from.

use crate::error::AppError;
use crate::models::{BillSummary, CallRecord};
use rust_decimal::Decimal;

/// Rating service trait
pub trait RatingService: Send + Sync {
    /// Cost of a single call, rounded to two digits
    fn price_call(&self, record: &CallRecord) -> Decimal;
}

/// Billing service trait
pub trait BillCalculator: Send + Sync {
    /// Total bill for a raw call log
    fn calculate(&self, phone_log: &str) -> Result<Decimal, AppError>;

    /// Total bill with per-call detail
    fn itemize(&self, phone_log: &str) -> Result<BillSummary, AppError>;
}
