//! In-memory store adapters

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use core_kernel::{Balance, ClaimId, DomainStore, StoreError};
use domain_claims::{Claim, ClaimStore};
use domain_member::{Address, MemberStore};
use domain_member::states::US_STATE_CODES;
use domain_quote::{InsuranceType, RateStore};

/// Claim store backed by a `Mutex<Vec<Claim>>`
pub struct InMemoryClaimStore {
    claims: Mutex<Vec<Claim>>,
}

impl InMemoryClaimStore {
    pub fn new(claims: Vec<Claim>) -> Self {
        Self {
            claims: Mutex::new(claims),
        }
    }

    /// Current store contents, for assertions
    pub fn snapshot(&self) -> Vec<Claim> {
        self.claims.lock().expect("claim store poisoned").clone()
    }
}

impl DomainStore for InMemoryClaimStore {}

#[async_trait]
impl ClaimStore for InMemoryClaimStore {
    async fn list_claims(&self) -> Result<Vec<Claim>, StoreError> {
        Ok(self.snapshot())
    }

    async fn create_claim(&self, claim: &Claim) -> Result<(), StoreError> {
        self.claims
            .lock()
            .expect("claim store poisoned")
            .push(claim.clone());
        Ok(())
    }

    async fn update_claim_balance(
        &self,
        claim_id: &ClaimId,
        new_balance: Balance,
    ) -> Result<(), StoreError> {
        let mut claims = self.claims.lock().expect("claim store poisoned");
        let claim = claims
            .iter_mut()
            .find(|c| c.id == *claim_id)
            .ok_or_else(|| StoreError::not_found("Claim", claim_id))?;
        claim.balance = new_balance;
        Ok(())
    }
}

/// Member store holding the singleton address and the seeded state list
pub struct InMemoryMemberStore {
    address: Mutex<Address>,
    states: Vec<String>,
}

impl InMemoryMemberStore {
    pub fn new(address: Address) -> Self {
        Self {
            address: Mutex::new(address),
            states: US_STATE_CODES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Current address, for assertions
    pub fn current_address(&self) -> Address {
        self.address.lock().expect("member store poisoned").clone()
    }
}

impl DomainStore for InMemoryMemberStore {}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn get_home_address(&self) -> Result<Address, StoreError> {
        Ok(self.current_address())
    }

    async fn update_home_address(&self, address: &Address) -> Result<(), StoreError> {
        *self.address.lock().expect("member store poisoned") = address.clone();
        Ok(())
    }

    async fn valid_states(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.states.clone())
    }
}

/// Rate store with fixed baseline rates per line
pub struct InMemoryRateStore {
    rates: HashMap<InsuranceType, Decimal>,
}

impl InMemoryRateStore {
    /// Seeds the usual fixture rates (home 120, auto 95, life 65)
    pub fn new() -> Self {
        let mut rates = HashMap::new();
        rates.insert(InsuranceType::Home, Decimal::new(12000, 2));
        rates.insert(InsuranceType::Auto, Decimal::new(9500, 2));
        rates.insert(InsuranceType::Life, Decimal::new(6500, 2));
        Self { rates }
    }

    pub fn with_rate(mut self, insurance_type: InsuranceType, rate: Decimal) -> Self {
        self.rates.insert(insurance_type, rate);
        self
    }
}

impl Default for InMemoryRateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainStore for InMemoryRateStore {}

#[async_trait]
impl RateStore for InMemoryRateStore {
    async fn baseline_rate(&self, insurance_type: InsuranceType) -> Result<Decimal, StoreError> {
        self.rates
            .get(&insurance_type)
            .copied()
            .ok_or_else(|| StoreError::not_found("BaselineRate", insurance_type.key()))
    }
}

/// A store whose every operation fails with a connection error
///
/// Stands in for a configured-but-unreachable database when testing the
/// service-unavailable path.
pub struct UnreachableStore;

impl UnreachableStore {
    fn refused<T>() -> Result<T, StoreError> {
        Err(StoreError::Connection("connection refused".to_string()))
    }
}

impl DomainStore for UnreachableStore {}

#[async_trait]
impl ClaimStore for UnreachableStore {
    async fn list_claims(&self) -> Result<Vec<Claim>, StoreError> {
        Self::refused()
    }

    async fn create_claim(&self, _claim: &Claim) -> Result<(), StoreError> {
        Self::refused()
    }

    async fn update_claim_balance(
        &self,
        _claim_id: &ClaimId,
        _new_balance: Balance,
    ) -> Result<(), StoreError> {
        Self::refused()
    }
}

#[async_trait]
impl MemberStore for UnreachableStore {
    async fn get_home_address(&self) -> Result<Address, StoreError> {
        Self::refused()
    }

    async fn update_home_address(&self, _address: &Address) -> Result<(), StoreError> {
        Self::refused()
    }

    async fn valid_states(&self) -> Result<Vec<String>, StoreError> {
        Self::refused()
    }
}

#[async_trait]
impl RateStore for UnreachableStore {
    async fn baseline_rate(&self, _insurance_type: InsuranceType) -> Result<Decimal, StoreError> {
        Self::refused()
    }
}
