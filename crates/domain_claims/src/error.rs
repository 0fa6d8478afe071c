//! Claims domain errors

use thiserror::Error;

use core_kernel::StoreError;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    /// The claim ID did not match any stored claim
    #[error("claim not found: {0}")]
    NotFound(String),

    /// The store failed underneath the operation
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ClaimError {
    /// Returns true when the error is recoverable as a user re-prompt
    /// rather than a failed turn
    pub fn is_user_recoverable(&self) -> bool {
        matches!(self, ClaimError::NotFound(_))
    }
}
