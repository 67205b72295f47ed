//! PhoneBill Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the PhoneBill system. It includes:
//!
//! - Domain models (CallRecord, Call, Contact, Tariff)
//! - The `CallSource` trait the billing service reads through
//! - Unified error handling with exit-code mapping
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
