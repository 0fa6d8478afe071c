//! Balance ledger
//!
//! Applies payments to claim balances through a passed-in store handle.
//! A payment is the only mutation this domain performs.
//!
//! Payment application is NOT idempotent across retried turns: no
//! transaction ID or dedup key is tracked, so a caller that retries a
//! whole turn after a timeout can double-apply. Callers own deduplication.

use std::sync::Arc;

use core_kernel::{Balance, PaymentAmount};
use tracing::info;

use crate::claim::Claim;
use crate::error::ClaimError;
use crate::lookup::find_claim_mut;
use crate::store::ClaimStore;

/// Result of attempting a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Payment applied; the balance now reads `new_balance`
    Accepted { new_balance: Balance },
    /// Payment exceeded the outstanding balance; nothing was mutated and
    /// `clamped` carries the pre-payment balance to re-offer to the user
    ExceedsBalance { clamped: Balance },
}

impl PaymentOutcome {
    /// True if the payment was applied
    pub fn accepted(&self) -> bool {
        matches!(self, PaymentOutcome::Accepted { .. })
    }

    /// The balance to report back to the member either way
    pub fn reported_balance(&self) -> Balance {
        match self {
            PaymentOutcome::Accepted { new_balance } => *new_balance,
            PaymentOutcome::ExceedsBalance { clamped } => *clamped,
        }
    }
}

/// Ledger over the claim store
///
/// Owns no state of its own; every operation re-reads the store, applies
/// the domain rule, and writes back on acceptance.
#[derive(Clone)]
pub struct ClaimLedger {
    store: Arc<dyn ClaimStore>,
}

impl ClaimLedger {
    /// Creates a ledger over the given store handle
    pub fn new(store: Arc<dyn ClaimStore>) -> Self {
        Self { store }
    }

    /// Applies a payment to a claim
    ///
    /// The amount has already passed parse validation ([`PaymentAmount`]).
    /// Returns [`ClaimError::NotFound`] for an unknown claim ID; an
    /// amount above the balance yields `Ok(ExceedsBalance)` with the
    /// store untouched.
    pub async fn apply_payment(
        &self,
        claim_id: &str,
        amount: PaymentAmount,
    ) -> Result<PaymentOutcome, ClaimError> {
        let mut claims = self.store.list_claims().await?;
        let claim = find_claim_mut(&mut claims, claim_id)
            .ok_or_else(|| ClaimError::NotFound(claim_id.to_string()))?;

        let outcome = claim.apply_payment(amount);
        if outcome.accepted() {
            self.store
                .update_claim_balance(&claim.id, claim.balance)
                .await?;
            info!(claim_id = %claim.id, amount = %amount, new_balance = %claim.balance, "payment applied");
        }

        Ok(outcome)
    }

    /// True iff the claim's balance is zero
    ///
    /// Consulted before ever prompting for a payment amount; a fully paid
    /// claim must not enter the payment form at all.
    pub async fn is_fully_paid(&self, claim_id: &str) -> Result<bool, ClaimError> {
        let claims = self.store.list_claims().await?;
        let claim = crate::lookup::find_claim(&claims, claim_id)
            .ok_or_else(|| ClaimError::NotFound(claim_id.to_string()))?;
        Ok(claim.is_fully_paid())
    }

    /// Files a new claim with the given opening balance
    pub async fn file_claim(&self, balance: Balance) -> Result<Claim, ClaimError> {
        let claim = Claim::file_new(balance);
        self.store.create_claim(&claim).await?;
        info!(claim_id = %claim.id, balance = %claim.balance, "claim filed");
        Ok(claim)
    }

    /// All claims, in store order
    pub async fn claims(&self) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.store.list_claims().await?)
    }
}
