//! Quote Domain
//!
//! Baseline monthly rates per insurance type, an age check for the quote
//! form, and the premium estimate the chatbot quotes back.

pub mod quote;
pub mod store;
pub mod error;

pub use quote::{InsuranceType, QuoteEstimate, QuoteService, validate_age};
pub use store::RateStore;
pub use error::QuoteError;
