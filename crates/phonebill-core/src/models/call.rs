//! Call record model
//!
//! One parsed line of a customer's call log.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Timestamp layout used by the call log (`dd-mm-yyyy HH:MM:SS`)
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Call record
///
/// Timestamps are naive local time with second precision. The parser
/// guarantees `end >= start`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CallRecord {
    /// Called phone number, digits only
    pub number: String,

    /// Call start
    pub start: NaiveDateTime,

    /// Call end
    pub end: NaiveDateTime,
}

impl CallRecord {
    pub fn new(number: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            number: number.into(),
            start,
            end,
        }
    }

    /// Call duration in whole seconds
    #[inline]
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds().max(0)
    }

    /// Duration rounded up to whole minutes
    ///
    /// A call of 1 second bills 1 minute, 60 seconds bills 1 minute and
    /// 61 seconds bills 2 minutes.
    #[inline]
    pub fn billable_minutes(&self) -> i64 {
        (self.duration_seconds() + 59) / 60
    }

    /// Get duration for display
    pub fn display_duration(&self) -> String {
        let secs = self.duration_seconds();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}
