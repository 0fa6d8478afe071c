//! Quote domain errors

use thiserror::Error;

use core_kernel::StoreError;

/// Errors that can occur while quoting
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The age slot did not parse as a whole number; carries the input
    #[error("'{0}' is not a number")]
    AgeNotANumber(String),

    /// The age parsed but is outside the quotable range
    #[error("age {0} is outside the quotable range")]
    AgeOutOfRange(u32),

    /// No baseline rate is configured for the requested line
    #[error("unknown insurance type: {0}")]
    UnknownInsuranceType(String),

    /// The store failed underneath the operation
    #[error(transparent)]
    Store(#[from] StoreError),
}
