//! Claims Domain
//!
//! Claim records as the member store holds them, plus the three pieces of
//! logic the chatbot needs over them:
//!
//! - exact-ID lookup ([`lookup::find_claim`])
//! - a browsing cursor re-derived every conversational turn
//!   ([`pagination::Cursor`])
//! - the balance ledger that applies payments ([`ledger::ClaimLedger`])

pub mod claim;
pub mod lookup;
pub mod pagination;
pub mod ledger;
pub mod store;
pub mod error;

pub use claim::{Claim, ClaimStatus};
pub use lookup::{find_claim, find_claim_mut};
pub use pagination::{Cursor, PageDirection};
pub use ledger::{ClaimLedger, PaymentOutcome};
pub use store::ClaimStore;
pub use error::ClaimError;
