//! Action layer errors
//!
//! Only failures an action cannot recover within the turn end up here.
//! Bad user input never does - validators utter a message and clear the
//! slot instead.

use thiserror::Error;

use core_kernel::StoreError;
use domain_claims::ClaimError;
use domain_member::MemberError;
use domain_quote::QuoteError;

/// Errors that abort an action invocation
#[derive(Debug, Error)]
pub enum ActionError {
    /// The runtime asked for an action this server does not register
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// A slot the action depends on is missing from the snapshot
    #[error("required slot '{0}' is missing")]
    MissingSlot(&'static str),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Member(#[from] MemberError),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ActionError {
    /// True when the underlying cause is an unreachable store
    ///
    /// The HTTP layer renders these turns as "service unavailable".
    pub fn is_service_unavailable(&self) -> bool {
        match self {
            ActionError::Store(e) => e.is_unavailable(),
            ActionError::Claim(ClaimError::Store(e)) => e.is_unavailable(),
            ActionError::Member(MemberError::Store(e)) => e.is_unavailable(),
            ActionError::Quote(QuoteError::Store(e)) => e.is_unavailable(),
            _ => false,
        }
    }
}
