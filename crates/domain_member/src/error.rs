//! Member domain errors

use thiserror::Error;

use core_kernel::StoreError;

/// Errors that can occur in the member domain
#[derive(Debug, Error)]
pub enum MemberError {
    /// The supplied state code is not a US state or DC; `value` is the
    /// input exactly as the user entered it
    #[error("'{value}' is not a valid US state code")]
    InvalidState { value: String },

    /// The address-change flow was driven out of order
    #[error("cannot {operation} an address change from state '{from}'")]
    InvalidTransition { from: String, operation: String },

    /// The store failed underneath the operation
    #[error(transparent)]
    Store(#[from] StoreError),
}
