//! Contact aggregator
//!
//! Groups priced calls by phone number into per-contact totals.

use phonebill_core::models::{Call, Contact};
use std::collections::HashMap;
use tracing::debug;

/// Per-contact accumulator for one billing batch
///
/// Contacts are kept in the order their first call was seen; the index map
/// only speeds up the lookup.
#[derive(Debug, Default)]
pub struct Aggregator {
    contacts: Vec<Contact>,
    index: HashMap<u64, usize>,
}

impl Aggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a call to its contact, creating the contact on first sight
    pub fn add(&mut self, call: Call) {
        let contact_id = call.contact_id();

        let slot = match self.index.get(&contact_id) {
            Some(&slot) => slot,
            None => {
                debug!("New contact: {}", contact_id);
                self.contacts.push(Contact::new(contact_id));
                self.index.insert(contact_id, self.contacts.len() - 1);
                self.contacts.len() - 1
            }
        };

        self.contacts[slot].add_call(call);
    }

    /// Finish aggregation, returning contacts in first-seen order
    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
    }
}

impl Extend<Call> for Aggregator {
    fn extend<I: IntoIterator<Item = Call>>(&mut self, iter: I) {
        for call in iter {
            self.add(call);
        }
    }
}

impl FromIterator<Call> for Aggregator {
    fn from_iter<I: IntoIterator<Item = Call>>(iter: I) -> Self {
        let mut aggregator = Self::new();
        aggregator.extend(iter);
        aggregator
    }
}

/// Group calls by contact, preserving first-seen order
pub fn aggregate<I: IntoIterator<Item = Call>>(calls: I) -> Vec<Contact> {
    calls.into_iter().collect::<Aggregator>().into_contacts()
}
