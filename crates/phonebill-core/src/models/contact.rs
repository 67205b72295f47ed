//! Contact model
//!
//! Per-phone-number accumulator built while aggregating a batch of calls.

use rust_decimal::Decimal;

use super::call::Call;

/// Contact entity
///
/// Collects every call made to one phone number together with running
/// totals. Lives for the duration of one billing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Numeric phone number
    pub contact_id: u64,

    /// Calls in input order
    pub calls: Vec<Call>,

    /// Sum of billable minutes over all calls
    pub total_minutes: i64,

    /// Sum of call prices
    pub total_price: Decimal,
}

impl Contact {
    /// Create an empty contact
    pub fn new(contact_id: u64) -> Self {
        Self {
            contact_id,
            calls: Vec::new(),
            total_minutes: 0,
            total_price: Decimal::ZERO,
        }
    }

    /// Append a call and update the running totals
    pub fn add_call(&mut self, call: Call) {
        self.total_minutes += call.billable_minutes();
        self.total_price += call.price();
        self.calls.push(call);
    }

    /// Number of calls recorded
    #[inline]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Sum of the decimal digits of the phone number
    #[inline]
    pub fn digit_sum(&self) -> u32 {
        digit_sum(self.contact_id)
    }
}

/// Sum of the base-10 digits of `n`
pub fn digit_sum(mut n: u64) -> u32 {
    let mut sum = 0;
    while n > 9 {
        sum += (n % 10) as u32;
        n /= 10;
    }
    sum + n as u32
}
