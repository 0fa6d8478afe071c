//! Member store port

use async_trait::async_trait;

use core_kernel::{DomainStore, StoreError};

use crate::address::Address;

/// Data-store operations for the member profile
#[async_trait]
pub trait MemberStore: DomainStore {
    /// The member's home address
    async fn get_home_address(&self) -> Result<Address, StoreError>;

    /// Overwrites the home address wholesale
    async fn update_home_address(&self, address: &Address) -> Result<(), StoreError>;

    /// The valid US state codes (50 states plus DC)
    async fn valid_states(&self) -> Result<Vec<String>, StoreError>;
}
