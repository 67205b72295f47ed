//! Domain models for PhoneBill
//!
//! This module contains the core domain models used throughout the application.

pub mod call;
pub mod contact;
pub mod tariff;

pub use call::{Call, CallRecord, TIMESTAMP_FORMAT};
pub use contact::{digit_sum, Contact};
pub use tariff::Tariff;
