//! Tariff model
//!
//! Fixed daily peak window and per-minute rates applied to every call.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tariff applied by the pricing engine
///
/// Immutable once built. `Tariff::default()` is the only tariff the
/// billing run uses; alternate tariffs exist for tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tariff {
    /// Start of the peak window, on the calendar date of the call start
    pub peak_start: NaiveTime,

    /// End of the peak window, on the calendar date of the call start
    pub peak_end: NaiveTime,

    /// Price of one peak minute
    pub peak_rate: Decimal,

    /// Minutes billed before the long-call surcharge applies
    pub surcharge_threshold_minutes: i64,

    /// Surcharge per minute beyond the threshold
    pub surcharge_per_minute: Decimal,
}

impl Tariff {
    /// Price of one off-peak minute (half the peak rate)
    #[inline]
    pub fn off_peak_rate(&self) -> Decimal {
        self.peak_rate / dec!(2)
    }

    /// Peak window boundaries on the given calendar date
    #[inline]
    pub fn peak_window_on(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (date.and_time(self.peak_start), date.and_time(self.peak_end))
    }

    /// Hour-granularity peak test
    ///
    /// Only the hour fields are compared, so a call ending at 16:59 is not
    /// "after" the window and one starting at 07:59 is "before" it.
    pub fn touches_peak(&self, start: &NaiveDateTime, end: &NaiveDateTime) -> bool {
        let first = self.peak_start.hour();
        let last = self.peak_end.hour();
        let in_peak = |hour: u32| hour >= first && hour < last;

        in_peak(start.hour()) || in_peak(end.hour()) || (start.hour() < first && end.hour() > last)
    }

    /// Long-call surcharge for the given billable minutes
    pub fn surcharge(&self, minutes: i64) -> Decimal {
        if minutes > self.surcharge_threshold_minutes {
            self.surcharge_per_minute * Decimal::from(minutes - self.surcharge_threshold_minutes)
        } else {
            Decimal::ZERO
        }
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            peak_start: NaiveTime::MIN + TimeDelta::hours(8),
            peak_end: NaiveTime::MIN + TimeDelta::hours(16),
            peak_rate: dec!(1),
            surcharge_threshold_minutes: 5,
            surcharge_per_minute: dec!(0.2),
        }
    }
}
