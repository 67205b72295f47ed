//! Call model
//!
//! A raw call record as read from the input table, and the priced call
//! produced from it by the pricing engine.

use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;

/// Timestamp format used by call records
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Unpriced call record
///
/// One row of the input table: who was called, and when the call
/// started and ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    /// Numeric phone number of the contact
    pub contact_id: u64,

    /// Call start timestamp
    pub start: NaiveDateTime,

    /// Call end timestamp
    pub end: NaiveDateTime,

    /// 1-based line number in the source, 0 when built in code
    pub line: usize,
}

impl CallRecord {
    /// Create a record that did not come from a file
    pub fn new(contact_id: u64, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            contact_id,
            start,
            end,
            line: 0,
        }
    }

    /// Elapsed time between start and end
    #[inline]
    pub fn elapsed(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Priced call
///
/// Immutable once constructed; minutes and price are derived from the
/// record's timestamps and the tariff in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    record: CallRecord,
    billable_minutes: i64,
    price: Decimal,
}

impl Call {
    /// Wrap a record with its computed minutes and price
    pub fn new(record: CallRecord, billable_minutes: i64, price: Decimal) -> Self {
        Self {
            record,
            billable_minutes,
            price,
        }
    }

    #[inline]
    pub fn contact_id(&self) -> u64 {
        self.record.contact_id
    }

    #[inline]
    pub fn start(&self) -> NaiveDateTime {
        self.record.start
    }

    #[inline]
    pub fn end(&self) -> NaiveDateTime {
        self.record.end
    }

    /// Minutes used for pricing and for the surcharge threshold
    #[inline]
    pub fn billable_minutes(&self) -> i64 {
        self.billable_minutes
    }

    #[inline]
    pub fn price(&self) -> Decimal {
        self.price
    }
}
