//! Infrastructure Database Layer
//!
//! PostgreSQL implementations of the three store ports, using SQLx with
//! runtime-checked queries. The crate follows the repository pattern: one
//! repository per domain, each holding a clone of the shared pool and
//! exposing nothing SQL-shaped to the domain layer.
//!
//! No transactions and no schema versioning: every operation is a single
//! statement, and turn ordering is guaranteed by the caller (one
//! conversational turn completes before the next is dispatched).
//!
//! The schema lives in `migrations/001_init.sql` and is applied
//! externally.

pub mod pool;
pub mod error;
pub mod repositories;

pub use pool::{DatabaseConfig, DatabasePool, create_pool};
pub use repositories::{ClaimsRepository, MemberRepository, QuoteRepository};
