//! Rate store port

use async_trait::async_trait;
use rust_decimal::Decimal;

use core_kernel::{DomainStore, StoreError};

use crate::quote::InsuranceType;

/// Read-only access to baseline quote rates
#[async_trait]
pub trait RateStore: DomainStore {
    /// The monthly baseline rate for a line of insurance
    async fn baseline_rate(&self, insurance_type: InsuranceType) -> Result<Decimal, StoreError>;
}
