//! Exempt number resolution
//!
//! The number a customer calls most often is free. Ties go to the number
//! with the greatest numeric value.

use phonebill_core::{models::CallRecord, AppError, AppResult};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Count calls per distinct number
pub fn call_counts(records: &[CallRecord]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.number.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Find the number to exempt from billing
///
/// Returns `None` for an empty log. Every number tied for the highest call
/// count must be a non-negative integer.
#[instrument(skip(records), fields(records = records.len()))]
pub fn resolve_exempt_number(records: &[CallRecord]) -> AppResult<Option<String>> {
    let counts = call_counts(records);

    let Some(max_calls) = counts.values().copied().max() else {
        debug!("No call records, nothing to exempt");
        return Ok(None);
    };

    let mut candidates = Vec::new();
    for (&number, &calls) in &counts {
        if calls == max_calls {
            candidates.push(NumericKey::parse(number)?);
        }
    }

    let exempt = candidates.into_iter().max().map(|key| key.raw.to_string());

    debug!(
        "Exempt number {:?} with {} calls ({} distinct numbers)",
        exempt,
        max_calls,
        counts.len()
    );

    Ok(exempt)
}

/// Phone number ordered by integer value, unbounded in length
///
/// Numbers of equal value but different spelling (leading zeros) are
/// ordered by their text.
#[derive(Debug, PartialEq, Eq)]
struct NumericKey<'a> {
    raw: &'a str,
    digits: &'a str,
}

impl<'a> NumericKey<'a> {
    fn parse(raw: &'a str) -> AppResult<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::InvalidNumber(raw.to_string()));
        }

        Ok(Self {
            raw,
            digits: raw.trim_start_matches('0'),
        })
    }
}

impl Ord for NumericKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(other.digits))
            .then_with(|| self.raw.cmp(other.raw))
    }
}

impl PartialOrd for NumericKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
