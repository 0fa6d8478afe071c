//! Claims repository implementation
//!
//! Database access for claim records: listing, filing, and balance
//! updates. Statuses are stored as lowercase text.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

use core_kernel::{Balance, ClaimId, DomainStore, StoreError};
use domain_claims::{Claim, ClaimStatus, ClaimStore};

use crate::error::store_error;

/// Repository for claim records
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    /// Creates a new repository over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainStore for ClaimsRepository {}

#[async_trait]
impl ClaimStore for ClaimsRepository {
    async fn list_claims(&self) -> Result<Vec<Claim>, StoreError> {
        let rows: Vec<ClaimRow> = sqlx::query_as(
            r#"
            SELECT claim_id, claim_date, claim_balance, claim_status
            FROM claims
            ORDER BY claim_date DESC, claim_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        debug!(count = rows.len(), "claims listed");
        rows.into_iter().map(Claim::try_from).collect()
    }

    async fn create_claim(&self, claim: &Claim) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO claims (claim_id, claim_date, claim_balance, claim_status)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(claim.id.as_str())
        .bind(claim.claim_date)
        .bind(claim.balance.amount())
        .bind(status_to_str(claim.status))
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(())
    }

    async fn update_claim_balance(
        &self,
        claim_id: &ClaimId,
        new_balance: Balance,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE claims SET claim_balance = $2 WHERE claim_id = $1
            "#,
        )
        .bind(claim_id.as_str())
        .bind(new_balance.amount())
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Claim", claim_id));
        }
        Ok(())
    }
}

/// Database row for a claim
#[derive(Debug, sqlx::FromRow)]
struct ClaimRow {
    claim_id: String,
    claim_date: NaiveDate,
    claim_balance: Decimal,
    claim_status: String,
}

impl TryFrom<ClaimRow> for Claim {
    type Error = StoreError;

    fn try_from(row: ClaimRow) -> Result<Self, Self::Error> {
        let balance = Balance::new(row.claim_balance).map_err(|e| {
            StoreError::Malformed(format!("claim {}: {}", row.claim_id, e))
        })?;
        let status = status_from_str(&row.claim_status).ok_or_else(|| {
            StoreError::Malformed(format!(
                "claim {}: unknown status '{}'",
                row.claim_id, row.claim_status
            ))
        })?;

        Ok(Claim {
            id: ClaimId::new(row.claim_id),
            claim_date: row.claim_date,
            balance,
            status,
        })
    }
}

fn status_to_str(status: ClaimStatus) -> &'static str {
    match status {
        ClaimStatus::Pending => "pending",
        ClaimStatus::Approved => "approved",
        ClaimStatus::Denied => "denied",
        ClaimStatus::Paid => "paid",
    }
}

fn status_from_str(s: &str) -> Option<ClaimStatus> {
    match s {
        "pending" => Some(ClaimStatus::Pending),
        "approved" => Some(ClaimStatus::Approved),
        "denied" => Some(ClaimStatus::Denied),
        "paid" => Some(ClaimStatus::Paid),
        _ => None,
    }
}
