//! Business logic services for PhoneBill
//!
//! This crate contains the billing pipeline for a customer's call log:
//!
//! 1. `parser` - raw log text to ordered call records
//! 2. `frequency` - the most frequently called number, which is free
//! 3. `rating` - per-call cost under the time-of-day tariff
//! 4. `billing` - orchestration and the final rounded total
//!
//! Every stage is a pure function over immutable data, so calculators can
//! be shared across threads without locking.
//!
//! # Example
//!
//! ```
//! let log = "420774577453,13-01-2020 18:10:15,13-01-2020 18:12:57\n\
//!            420776562353,18-01-2020 08:59:20,18-01-2020 09:10:00";
//! let total = phonebill_services::calculate(log).unwrap();
//! assert_eq!(total.to_string(), "1.50");
//! ```

pub mod billing;
pub mod frequency;
pub mod parser;
pub mod rating;

pub use billing::{calculate, PhoneBillCalculator};
pub use frequency::resolve_exempt_number;
pub use parser::parse_call_log;
pub use rating::TariffRatingService;
