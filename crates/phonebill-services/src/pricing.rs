//! Pricing engine implementation
//!
//! Computes billable minutes and price for a single call from its start and
//! end timestamps, splitting elapsed time between the peak and off-peak tiers.

use chrono::{NaiveDateTime, TimeDelta};
use phonebill_core::models::{Call, CallRecord, Tariff};
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

/// Elapsed seconds of a call split by tariff tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeakSplit {
    /// Seconds inside the peak window
    pub peak_seconds: i64,

    /// Seconds outside the peak window
    pub off_peak_seconds: i64,
}

/// Pricing engine
///
/// Pure function of the call timestamps and the injected tariff; pricing the
/// same call twice always yields the same minutes and price.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    tariff: Tariff,
}

impl PricingEngine {
    /// Create a pricing engine for the given tariff
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    /// Billable minutes for an elapsed duration
    ///
    /// One second is shaved off before rounding up, so 60 and 61 seconds
    /// both bill 1 minute and 122 seconds bills 3.
    #[inline]
    pub fn billable_minutes(elapsed_seconds: i64) -> i64 {
        ceil_div(elapsed_seconds - 1, 60)
    }

    /// Split a call's elapsed seconds into peak and off-peak
    ///
    /// The window is always taken from the calendar date of `start`. Whether
    /// the call touches it at all is decided on hour fields only. A call that
    /// starts at or after `peak_start` is credited peak time from
    /// `peak_start`, not from its own start.
    pub fn split(&self, start: NaiveDateTime, end: NaiveDateTime) -> PeakSplit {
        if !self.tariff.touches_peak(&start, &end) {
            return PeakSplit {
                peak_seconds: 0,
                off_peak_seconds: seconds_between(start, end),
            };
        }

        let (peak_start, peak_end) = self.tariff.peak_window_on(start.date());

        if start < peak_start {
            let mut off_peak_seconds = seconds_between(start, peak_start);
            let peak_seconds = if end > peak_end {
                off_peak_seconds += seconds_between(peak_end, end);
                seconds_between(peak_start, peak_end)
            } else {
                seconds_between(peak_start, end)
            };
            PeakSplit {
                peak_seconds,
                off_peak_seconds,
            }
        } else if end > peak_end {
            PeakSplit {
                peak_seconds: seconds_between(peak_start, peak_end),
                off_peak_seconds: seconds_between(peak_end, end),
            }
        } else {
            PeakSplit {
                peak_seconds: seconds_between(peak_start, end),
                off_peak_seconds: 0,
            }
        }
    }

    /// Price a call from its timestamps
    ///
    /// Returns `(billable_minutes, price)`.
    pub fn price_call(&self, start: NaiveDateTime, end: NaiveDateTime) -> (i64, Decimal) {
        let minutes = Self::billable_minutes(seconds_between(start, end));
        let split = self.split(start, end);

        let peak_cost = Decimal::from(ceil_div(split.peak_seconds, 60)) * self.tariff.peak_rate;
        let off_peak_cost =
            Decimal::from(ceil_div(split.off_peak_seconds, 60)) * self.tariff.off_peak_rate();

        let price = peak_cost + off_peak_cost + self.tariff.surcharge(minutes);

        (minutes, price)
    }

    /// Price a raw record into an immutable call
    #[instrument(skip(self, record), fields(contact_id = record.contact_id, line = record.line))]
    pub fn price(&self, record: CallRecord) -> Call {
        if record.elapsed() <= TimeDelta::zero() {
            warn!(
                "Non-positive call duration: {} -> {}",
                record.start, record.end
            );
        }

        let (minutes, price) = self.price_call(record.start, record.end);

        let call = Call::new(record, minutes, price);

        debug!(
            "Priced call {} -> {}: {} min, cost {}",
            call.start(),
            call.end(),
            minutes,
            price
        );

        call
    }
}

/// Signed seconds from `from` to `to`
#[inline]
fn seconds_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_seconds()
}

/// Ceiling division for a positive divisor, correct for negative numerators
#[inline]
fn ceil_div(n: i64, d: i64) -> i64 {
    let q = n / d;
    if n % d > 0 {
        q + 1
    } else {
        q
    }
}
