//! Quote-rate repository implementation

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use core_kernel::{DomainStore, StoreError};
use domain_quote::{InsuranceType, RateStore};

use crate::error::store_error;

/// Repository for baseline quote rates
#[derive(Debug, Clone)]
pub struct QuoteRepository {
    pool: PgPool,
}

impl QuoteRepository {
    /// Creates a new repository over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainStore for QuoteRepository {}

#[async_trait]
impl RateStore for QuoteRepository {
    async fn baseline_rate(&self, insurance_type: InsuranceType) -> Result<Decimal, StoreError> {
        let row: Option<(Decimal,)> = sqlx::query_as(
            r#"
            SELECT baseline_rate FROM policy_quote WHERE insurance_type = $1
            "#,
        )
        .bind(insurance_type.key())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        row.map(|(rate,)| rate)
            .ok_or_else(|| StoreError::not_found("BaselineRate", insurance_type.key()))
    }
}
