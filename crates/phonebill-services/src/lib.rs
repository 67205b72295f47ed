//! Business logic services for PhoneBill
//!
//! This crate contains the services that turn raw call records into a
//! billed total.
//!
//! # Services
//!
//! - `PricingEngine` - Per-call minutes and price with peak/off-peak split
//! - `Aggregator` - Per-contact totals in first-seen order
//! - `select_favorite` - Favorite number selection and exemption
//! - `BillingService` - Batch orchestration over a `CallSource`
//! - `CsvCallSource` - Call records from a CSV table

pub mod aggregator;
pub mod billing;
pub mod csv_source;
pub mod favorite;
pub mod pricing;

pub use aggregator::{aggregate, Aggregator};
pub use billing::{BillingService, BillingSummary};
pub use csv_source::CsvCallSource;
pub use favorite::{select_favorite, total_cost};
pub use pricing::{PeakSplit, PricingEngine};
