//! Favorite contact selection
//!
//! The favorite number is the contact with the most billed minutes; its
//! charges are exempted from the batch total.

use phonebill_core::{models::Contact, AppError, AppResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

/// Pick the favorite contact
///
/// Contacts are stable-sorted by total minutes, descending. Among those
/// tied with the leader, the larger digit sum of the phone number wins;
/// on a full tie the first one in sorted order (i.e. first seen) is kept.
///
/// # Errors
///
/// Returns `AppError::EmptyDataset` when `contacts` is empty
pub fn select_favorite(contacts: &[Contact]) -> AppResult<&Contact> {
    let mut sorted: Vec<&Contact> = contacts.iter().collect();
    sorted.sort_by(|a, b| b.total_minutes.cmp(&a.total_minutes));

    let mut winner = *sorted.first().ok_or(AppError::EmptyDataset)?;

    for &contact in &sorted {
        if contact.total_minutes == winner.total_minutes
            && contact.digit_sum() > winner.digit_sum()
        {
            winner = contact;
        }
    }

    debug!(
        "Favorite contact: {} ({} min, digit sum {})",
        winner.contact_id,
        winner.total_minutes,
        winner.digit_sum()
    );

    Ok(winner)
}

/// Total charged for a batch: all contacts minus the favorite, rounded up
pub fn total_cost(contacts: &[Contact], favorite: &Contact) -> i64 {
    let gross: Decimal = contacts.iter().map(|c| c.total_price).sum();
    ceil_to_i64(gross - favorite.total_price)
}

/// Round a monetary amount up to a whole unit
fn ceil_to_i64(amount: Decimal) -> i64 {
    amount.ceil().to_i64().unwrap_or(if amount.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn contact(contact_id: u64, total_minutes: i64, total_price: Decimal) -> Contact {
        Contact {
            total_minutes,
            total_price,
            ..Contact::new(contact_id)
        }
    }

    #[test]
    fn test_most_minutes_wins() {
        let contacts = vec![
            contact(999999, 3, dec!(3)),
            contact(100, 7, dec!(5)),
            contact(555, 5, dec!(4)),
        ];
        assert_eq!(select_favorite(&contacts).unwrap().contact_id, 100);
    }

    #[test]
    fn test_tie_broken_by_digit_sum() {
        let contacts = vec![
            contact(420448147315, 4, dec!(2)),
            contact(420490506169, 4, dec!(2)),
            contact(420600768405, 2, dec!(2)),
        ];
        // digit sums 43 vs 46
        assert_eq!(select_favorite(&contacts).unwrap().contact_id, 420490506169);
    }

    #[test]
    fn test_digit_sum_only_breaks_ties() {
        let contacts = vec![contact(10, 5, dec!(1)), contact(99, 4, dec!(1))];
        assert_eq!(select_favorite(&contacts).unwrap().contact_id, 10);
    }

    #[test]
    fn test_full_tie_keeps_first_seen() {
        // 12 and 21 have the same minutes and digit sum
        let contacts = vec![contact(5, 1, dec!(1)), contact(21, 4, dec!(1)), contact(12, 4, dec!(1))];
        assert_eq!(select_favorite(&contacts).unwrap().contact_id, 21);
    }

    #[test]
    fn test_empty_is_an_error() {
        assert!(matches!(select_favorite(&[]), Err(AppError::EmptyDataset)));
    }

    #[test]
    fn test_total_cost_exempts_favorite() {
        let contacts = vec![
            contact(1, 2, dec!(2)),
            contact(2, 9, dec!(7.4)),
            contact(3, 1, dec!(0.5)),
        ];
        let favorite = select_favorite(&contacts).unwrap();
        assert_eq!(favorite.contact_id, 2);
        // 2 + 0.5 = 2.5, rounded up
        assert_eq!(total_cost(&contacts, favorite), 3);
    }

    #[test]
    fn test_ceil_to_i64() {
        assert_eq!(ceil_to_i64(dec!(2.0)), 2);
        assert_eq!(ceil_to_i64(dec!(2.1)), 3);
        assert_eq!(ceil_to_i64(dec!(-2.5)), -2);
        assert_eq!(ceil_to_i64(Decimal::ZERO), 0);
    }
}
