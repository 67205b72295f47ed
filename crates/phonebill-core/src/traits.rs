//! Common traits at the I/O seam
//!
//! Defines the abstraction the billing service reads call records through.

use crate::error::AppError;
use crate::models::CallRecord;

/// Source of raw call records
///
/// Implementations read the whole batch at once; billing never starts on a
/// partial batch.
pub trait CallSource {
    /// Read every record in the source, in order
    fn read_records(&mut self) -> Result<Vec<CallRecord>, AppError>;
}

/// In-memory call source
impl CallSource for Vec<CallRecord> {
    fn read_records(&mut self) -> Result<Vec<CallRecord>, AppError> {
        Ok(std::mem::take(self))
    }
}
