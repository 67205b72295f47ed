//! Batch billing service
//!
//! Drives one billing run: read every record, price each call, aggregate
//! per contact, exempt the favorite, and compute the total.

use phonebill_core::{
    models::{Contact, Tariff},
    traits::CallSource,
    AppError, AppResult,
};
use rust_decimal::Decimal;
use tracing::{error, info, instrument};

use crate::aggregator::aggregate;
use crate::favorite::{select_favorite, total_cost};
use crate::pricing::PricingEngine;

/// Outcome of one billing run
#[derive(Debug, Clone)]
pub struct BillingSummary {
    /// Contacts in first-seen order
    pub contacts: Vec<Contact>,

    /// Phone number whose charges were exempted
    pub favorite_id: u64,

    /// Sum of every contact's price
    pub gross_cost: Decimal,

    /// Amount waived for the favorite contact
    pub exempted: Decimal,

    /// Gross cost minus the exemption, rounded up
    pub total_cost: i64,
}

impl BillingSummary {
    /// Total number of priced calls
    pub fn call_count(&self) -> usize {
        self.contacts.iter().map(Contact::call_count).sum()
    }
}

/// Billing service
///
/// Owns the pricing engine; every run is independent.
#[derive(Debug, Clone, Default)]
pub struct BillingService {
    pricing: PricingEngine,
}

impl BillingService {
    /// Create a billing service with the given tariff
    pub fn new(tariff: Tariff) -> Self {
        Self {
            pricing: PricingEngine::new(tariff),
        }
    }

    /// Bill every call in the source
    ///
    /// # Errors
    ///
    /// Propagates source errors, and returns `AppError::EmptyDataset` when
    /// the source holds no records
    #[instrument(skip(self, source))]
    pub fn bill<S: CallSource + ?Sized>(&self, source: &mut S) -> AppResult<BillingSummary> {
        let records = source.read_records()?;

        if records.is_empty() {
            error!("No call records to bill");
            return Err(AppError::EmptyDataset);
        }

        let contacts = aggregate(records.into_iter().map(|record| self.pricing.price(record)));

        info!("Aggregated {} contacts", contacts.len());

        let favorite = select_favorite(&contacts)?;

        let favorite_id = favorite.contact_id;
        let exempted = favorite.total_price;
        let gross_cost: Decimal = contacts.iter().map(|c| c.total_price).sum();
        let total_cost = total_cost(&contacts, favorite);

        info!(
            "Billing complete: gross {}, favorite {} exempts {}, total {}",
            gross_cost, favorite_id, exempted, total_cost
        );

        Ok(BillingSummary {
            contacts,
            favorite_id,
            gross_cost,
            exempted,
            total_cost,
        })
    }
}
