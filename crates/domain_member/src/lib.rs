//! Member Domain
//!
//! The member's home address as a store-backed singleton, the US state
//! code check used when a new address comes in, and the state machine
//! behind the address-change conversation flow.

pub mod address;
pub mod states;
pub mod change;
pub mod store;
pub mod error;

pub use address::{Address, AddressBook};
pub use states::normalize_state;
pub use change::AddressChange;
pub use store::MemberStore;
pub use error::MemberError;
