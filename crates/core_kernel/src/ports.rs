//! Store ports
//!
//! Each domain defines its own store trait for the records it owns (claims,
//! member profile, quote rates). All of them use the unified [`StoreError`]
//! here, so adapters - the PostgreSQL repositories in `infra_db` or the
//! in-memory stores in `test_utils` - report failures the same way.
//!
//! The store handle is always passed in explicitly. There is no global
//! store state; that keeps handlers testable against in-memory adapters.

use std::fmt;
use thiserror::Error;

/// Error type for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested record does not exist
    #[error("not found: {entity} with id '{id}'")]
    NotFound { entity: String, id: String },

    /// The store is configured but unreachable
    #[error("store connection failed: {0}")]
    Connection(String),

    /// A read or write against the store failed
    #[error("store query failed: {0}")]
    Query(String),

    /// Stored data did not have the expected shape
    #[error("stored data malformed: {0}")]
    Malformed(String),
}

impl StoreError {
    /// Creates a NotFound error for an entity type and identifier
    pub fn not_found(entity: impl Into<String>, id: impl fmt::Display) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Returns true if this error indicates a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Returns true if the store itself is unavailable
    ///
    /// The webhook layer turns these into a per-request "service
    /// unavailable" failure; nothing in this codebase retries.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Connection(_))
    }
}

/// Marker trait for all domain store ports
///
/// Store traits extend this marker so handles can be held behind
/// `Arc<dyn ...>` and shared with async handlers.
pub trait DomainStore: Send + Sync + 'static {}
