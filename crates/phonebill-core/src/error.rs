//! Unified error handling for PhoneBill
//!
//! This module provides a single error type covering every way a billing run
//! can fail, with a stable error code and a process exit status per variant.

use thiserror::Error;

/// Main application error type
///
/// All errors in the application should be converted to this type.
/// None of them are recoverable: a billing run either completes or aborts.
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Input Errors ====================
    #[error("Missing or invalid input file: {0}")]
    MissingOrInvalidFile(String),

    #[error("Malformed timestamp on line {line}: '{value}' (expected YYYY-MM-DD HH:MM:SS)")]
    MalformedTimestamp { line: usize, value: String },

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    // ==================== Business Logic Errors ====================
    #[error("Empty dataset: no call records to bill")]
    EmptyDataset,

    // ==================== Command Line Errors ====================
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    // ==================== Internal Errors ====================
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // Usage errors, same convention as clap
            AppError::UnknownOption(_) => 2,
            _ => 1,
        }
    }

    /// Returns the machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingOrInvalidFile(_) => "missing_or_invalid_file",
            AppError::MalformedTimestamp { .. } => "malformed_timestamp",
            AppError::MalformedRecord { .. } => "malformed_record",
            AppError::EmptyDataset => "empty_dataset",
            AppError::UnknownOption(_) => "unknown_option",
            AppError::Config(_) => "config_error",
        }
    }
}

// ==================== From implementations ====================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::MissingOrInvalidFile(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<clap::Error> for AppError {
    fn from(err: clap::Error) -> Self {
        use clap::error::{ContextKind, ErrorKind};

        match err.kind() {
            ErrorKind::MissingRequiredArgument => {
                AppError::MissingOrInvalidFile("no input file given (use -i/--ifile)".to_string())
            }
            _ => {
                let option = err
                    .get(ContextKind::InvalidArg)
                    .map(|arg| arg.to_string())
                    .unwrap_or_else(|| err.kind().to_string());
                AppError::UnknownOption(option)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(AppError::UnknownOption("-x".to_string()).exit_code(), 2);
        assert_eq!(AppError::EmptyDataset.exit_code(), 1);
        assert_eq!(
            AppError::MalformedTimestamp {
                line: 2,
                value: "yesterday".to_string()
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::EmptyDataset.error_code(), "empty_dataset");
        assert_eq!(
            AppError::MissingOrInvalidFile("calls.csv".to_string()).error_code(),
            "missing_or_invalid_file"
        );
    }

    #[test]
    fn test_io_error_maps_to_missing_file() {
        let err: AppError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into();
        assert!(matches!(err, AppError::MissingOrInvalidFile(_)));
    }

    #[test]
    fn test_malformed_timestamp_message() {
        let err = AppError::MalformedTimestamp {
            line: 3,
            value: "2022-13-01 00:00:00".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed timestamp on line 3: '2022-13-01 00:00:00' (expected YYYY-MM-DD HH:MM:SS)"
        );
    }
}
