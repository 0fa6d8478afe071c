//! SQLx-to-port error mapping
//!
//! The store ports speak [`StoreError`]; this module is the single place
//! SQLx errors are translated, so every repository classifies failures
//! the same way.

use core_kernel::StoreError;

/// Maps an SQLx error onto the port error taxonomy
///
/// Connection-level failures (unreachable server, exhausted pool) become
/// [`StoreError::Connection`]; a missing row becomes a generic not-found;
/// everything else is a query failure.
pub fn store_error(error: sqlx::Error) -> StoreError {
    match error {
        sqlx::Error::RowNotFound => StoreError::NotFound {
            entity: "Record".to_string(),
            id: "unknown".to_string(),
        },
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            StoreError::Connection(error.to_string())
        }
        sqlx::Error::Io(e) => StoreError::Connection(e.to_string()),
        sqlx::Error::Configuration(e) => StoreError::Connection(e.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_a_connection_error() {
        let mapped = store_error(sqlx::Error::PoolTimedOut);
        assert!(mapped.is_unavailable());
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let mapped = store_error(sqlx::Error::RowNotFound);
        assert!(mapped.is_not_found());
    }
}
