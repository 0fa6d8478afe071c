//! Claim store port

use async_trait::async_trait;

use core_kernel::{Balance, ClaimId, DomainStore, StoreError};

use crate::claim::Claim;

/// Data-store operations for claim records
///
/// Implemented over PostgreSQL in `infra_db` and in memory in
/// `test_utils`. No transactions and no schema versioning; turn ordering
/// is the caller's guarantee, so single-statement reads and writes are
/// enough here.
#[async_trait]
pub trait ClaimStore: DomainStore {
    /// All claims for the member, in store order
    async fn list_claims(&self) -> Result<Vec<Claim>, StoreError>;

    /// Inserts a newly filed claim
    async fn create_claim(&self, claim: &Claim) -> Result<(), StoreError>;

    /// Overwrites a claim's outstanding balance
    async fn update_claim_balance(
        &self,
        claim_id: &ClaimId,
        new_balance: Balance,
    ) -> Result<(), StoreError>;
}
