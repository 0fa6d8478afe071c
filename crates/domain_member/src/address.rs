//! Home address book

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::MemberError;
use crate::states::normalize_state;
use crate::store::MemberStore;

/// The member's home address
///
/// Singleton per member. Updates overwrite the whole record; there is no
/// partial patching. Street, city and zip are accepted as free text -
/// only the state code is validated. That gap (no zip format or
/// city/state consistency check) is inherited from the source system and
/// kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    /// Two-letter US state code, uppercase
    pub state: String,
    pub zip: String,
}

impl Address {
    /// Formats the address as a single display line
    pub fn format(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip)
    }
}

/// Address operations over the member store
#[derive(Clone)]
pub struct AddressBook {
    store: Arc<dyn MemberStore>,
}

impl AddressBook {
    /// Creates an address book over the given store handle
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }

    /// The member's current home address
    pub async fn get_address(&self) -> Result<Address, MemberError> {
        Ok(self.store.get_home_address().await?)
    }

    /// Validates a state code against the store's list
    ///
    /// Case-insensitive; returns the normalized uppercase code, or an
    /// error echoing the rejected input verbatim.
    pub async fn validate_state(&self, input: &str) -> Result<String, MemberError> {
        let valid = self.store.valid_states().await?;
        normalize_state(input, &valid)
    }

    /// Overwrites the home address wholesale
    ///
    /// The state code must already be normalized (see
    /// [`AddressBook::validate_state`]); this re-checks it so a bad
    /// address cannot be committed around the form flow.
    pub async fn set_address(&self, address: Address) -> Result<(), MemberError> {
        let valid = self.store.valid_states().await?;
        let state = normalize_state(&address.state, &valid)?;

        let normalized = Address { state, ..address };
        self.store.update_home_address(&normalized).await?;
        info!(address = %normalized.format(), "home address updated");
        Ok(())
    }
}
