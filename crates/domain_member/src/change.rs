//! Address-change conversation flow
//!
//! ```text
//! Idle -> AwaitingNewAddress -> AwaitingConfirmation -> Committed
//!                                                    \-> Reverted
//! ```
//!
//! The flow state is persisted in conversation slots between turns and
//! rebuilt here each turn. Reverting never touches the address book;
//! committing hands the pending address back for a wholesale overwrite.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::MemberError;

/// State of an address-change flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AddressChange {
    /// No change in progress
    Idle,
    /// Waiting for the member to supply the new address
    AwaitingNewAddress,
    /// New address captured, waiting for a yes/no
    AwaitingConfirmation { pending: Address },
    /// Confirmed; `committed` is what the store was (or is about to be)
    /// overwritten with
    Committed { committed: Address },
    /// Abandoned without mutating the address book
    Reverted,
}

impl AddressChange {
    /// Starts a change flow
    pub fn begin(self) -> Result<Self, MemberError> {
        match self {
            AddressChange::Idle => Ok(AddressChange::AwaitingNewAddress),
            other => Err(other.invalid("begin")),
        }
    }

    /// Records the candidate address and moves to confirmation
    pub fn propose(self, pending: Address) -> Result<Self, MemberError> {
        match self {
            AddressChange::AwaitingNewAddress => {
                Ok(AddressChange::AwaitingConfirmation { pending })
            }
            other => Err(other.invalid("propose")),
        }
    }

    /// Confirms the pending address
    pub fn confirm(self) -> Result<Self, MemberError> {
        match self {
            AddressChange::AwaitingConfirmation { pending } => {
                Ok(AddressChange::Committed { committed: pending })
            }
            other => Err(other.invalid("confirm")),
        }
    }

    /// Abandons the flow; nothing is mutated
    pub fn revert(self) -> Result<Self, MemberError> {
        match self {
            AddressChange::AwaitingNewAddress
            | AddressChange::AwaitingConfirmation { .. } => Ok(AddressChange::Reverted),
            other => Err(other.invalid("revert")),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            AddressChange::Idle => "idle",
            AddressChange::AwaitingNewAddress => "awaiting_new_address",
            AddressChange::AwaitingConfirmation { .. } => "awaiting_confirmation",
            AddressChange::Committed { .. } => "committed",
            AddressChange::Reverted => "reverted",
        }
    }

    fn invalid(self, operation: &str) -> MemberError {
        MemberError::InvalidTransition {
            from: self.name().to_string(),
            operation: operation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_address() -> Address {
        Address {
            street: "9 Oak Ave".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip: "78701".to_string(),
        }
    }

    #[test]
    fn test_happy_path_commits_pending_address() {
        let change = AddressChange::Idle
            .begin()
            .unwrap()
            .propose(new_address())
            .unwrap()
            .confirm()
            .unwrap();

        match change {
            AddressChange::Committed { committed } => assert_eq!(committed, new_address()),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn test_revert_from_confirmation() {
        let change = AddressChange::Idle
            .begin()
            .unwrap()
            .propose(new_address())
            .unwrap()
            .revert()
            .unwrap();

        assert_eq!(change, AddressChange::Reverted);
    }

    #[test]
    fn test_confirm_without_pending_is_rejected() {
        assert!(AddressChange::Idle.confirm().is_err());
        assert!(AddressChange::AwaitingNewAddress.confirm().is_err());
    }

    #[test]
    fn test_committed_is_terminal() {
        let committed = AddressChange::Committed {
            committed: new_address(),
        };
        assert!(committed.clone().begin().is_err());
        assert!(committed.revert().is_err());
    }

    #[test]
    fn test_slot_round_trip() {
        let change = AddressChange::AwaitingConfirmation {
            pending: new_address(),
        };
        let json = serde_json::to_value(&change).unwrap();
        let back: AddressChange = serde_json::from_value(json).unwrap();
        assert_eq!(back, change);
    }
}
