//! Shared test helpers
//!
//! In-memory implementations of the store ports, plus builders for the
//! records tests need. The in-memory stores give every test an isolated,
//! explicitly owned store handle - no shared global state.

pub mod stores;
pub mod builders;
