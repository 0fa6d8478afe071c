//! Member repository implementation
//!
//! The member profile is a single row holding the home address; updates
//! overwrite it wholesale. The US state list is a reference table.

use async_trait::async_trait;
use sqlx::PgPool;

use core_kernel::{DomainStore, StoreError};
use domain_member::{Address, MemberStore};

use crate::error::store_error;

/// Repository for the member profile
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// Creates a new repository over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainStore for MemberRepository {}

#[async_trait]
impl MemberStore for MemberRepository {
    async fn get_home_address(&self) -> Result<Address, StoreError> {
        let row: Option<AddressRow> = sqlx::query_as(
            r#"
            SELECT street, city, state, zip FROM member_info LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        row.map(Address::from)
            .ok_or_else(|| StoreError::not_found("MemberAddress", "member"))
    }

    async fn update_home_address(&self, address: &Address) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE member_info SET street = $1, city = $2, state = $3, zip = $4
            "#,
        )
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.zip)
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("MemberAddress", "member"));
        }
        Ok(())
    }

    async fn valid_states(&self) -> Result<Vec<String>, StoreError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT code FROM us_states ORDER BY code
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows.into_iter().map(|(code,)| code).collect())
    }
}

/// Database row for the home address
#[derive(Debug, sqlx::FromRow)]
struct AddressRow {
    street: String,
    city: String,
    state: String,
    zip: String,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Address {
            street: row.street,
            city: row.city,
            state: row.state,
            zip: row.zip,
        }
    }
}
