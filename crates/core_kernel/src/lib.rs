//! Core Kernel - Foundational types for the member-service chatbot backend
//!
//! This crate provides the building blocks used across all domain modules:
//! - Balance and payment-amount types with precise decimal arithmetic
//! - String-typed identifiers for store-issued record IDs
//! - The shared error type for data-store ports

pub mod money;
pub mod identifiers;
pub mod ports;

pub use money::{Balance, PaymentAmount, AmountError};
pub use identifiers::{ClaimId, SenderId};
pub use ports::{StoreError, DomainStore};
