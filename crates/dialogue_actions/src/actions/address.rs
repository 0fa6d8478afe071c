//! Address lookup and change flows
//!
//! The change flow walks the state machine in `domain_member::change`:
//! the form collects the four address fields, the confirmation slot
//! decides between commit and revert, and a revert leaves the address
//! book untouched.

use async_trait::async_trait;
use serde_json::Value;

use domain_member::{Address, AddressBook, AddressChange, MemberError};

use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::error::ActionError;
use crate::events::Event;
use crate::forms::{FormValidator, FreeTextSlot, SlotOutcome, SlotValidator};
use crate::slots;
use crate::tracker::Tracker;

/// Reads the member's current home address back to them
pub struct GetAddressAction {
    address_book: AddressBook,
}

impl GetAddressAction {
    pub fn new(address_book: AddressBook) -> Self {
        Self { address_book }
    }
}

#[async_trait]
impl Action for GetAddressAction {
    fn name(&self) -> &'static str {
        "action_get_address"
    }

    async fn run(
        &self,
        _tracker: &Tracker,
        dispatcher: &mut Dispatcher,
    ) -> Result<Vec<Event>, ActionError> {
        let address = self.address_book.get_address().await?;
        dispatcher.utter(format!("We have your home address as {}.", address.format()));
        Ok(vec![])
    }
}

/// Commits or reverts the collected address change
pub struct UpdateAddressAction {
    address_book: AddressBook,
}

impl UpdateAddressAction {
    pub fn new(address_book: AddressBook) -> Self {
        Self { address_book }
    }

    fn pending_address(tracker: &Tracker) -> Result<Address, ActionError> {
        let field = |name: &'static str| -> Result<String, ActionError> {
            tracker
                .slot_str(name)
                .map(str::to_string)
                .ok_or(ActionError::MissingSlot(name))
        };
        Ok(Address {
            street: field(slots::ADDRESS_STREET)?,
            city: field(slots::ADDRESS_CITY)?,
            state: field(slots::ADDRESS_STATE)?,
            zip: field(slots::ADDRESS_ZIP)?,
        })
    }

    fn done_events() -> Vec<Event> {
        vec![
            Event::clear_slot(slots::ADDRESS_STREET),
            Event::clear_slot(slots::ADDRESS_CITY),
            Event::clear_slot(slots::ADDRESS_STATE),
            Event::clear_slot(slots::ADDRESS_ZIP),
            Event::clear_slot(slots::CONFIRM_ADDRESS),
        ]
    }
}

#[async_trait]
impl Action for UpdateAddressAction {
    fn name(&self) -> &'static str {
        "action_update_address"
    }

    async fn run(
        &self,
        tracker: &Tracker,
        dispatcher: &mut Dispatcher,
    ) -> Result<Vec<Event>, ActionError> {
        let pending = Self::pending_address(tracker)?;

        let change = AddressChange::Idle
            .begin()
            .and_then(|c| c.propose(pending))
            .map_err(ActionError::Member)?;

        if tracker.slot_affirmed(slots::CONFIRM_ADDRESS) {
            let change = change.confirm().map_err(ActionError::Member)?;
            if let AddressChange::Committed { committed } = change {
                match self.address_book.set_address(committed).await {
                    Ok(()) => {
                        let address = self.address_book.get_address().await?;
                        dispatcher.utter(format!(
                            "Your address has been updated to {}.",
                            address.format()
                        ));
                    }
                    Err(MemberError::InvalidState { value }) => {
                        dispatcher.utter(format!(
                            "'{value}' is not a US state we recognize. \
                             Please give the two-letter state code."
                        ));
                        return Ok(vec![Event::clear_slot(slots::ADDRESS_STATE)]);
                    }
                    Err(other) => return Err(other.into()),
                }
            }
        } else {
            let _reverted = change.revert().map_err(ActionError::Member)?;
            dispatcher.utter("No changes made. We've kept your address on file.");
        }

        Ok(Self::done_events())
    }
}

/// Validates the state code against the store's US state list
pub struct StateCodeValidator {
    address_book: AddressBook,
}

#[async_trait]
impl SlotValidator for StateCodeValidator {
    async fn validate(
        &self,
        value: &Value,
        _tracker: &Tracker,
        dispatcher: &mut Dispatcher,
    ) -> Result<SlotOutcome, ActionError> {
        let Some(raw) = value.as_str() else {
            return Ok(SlotOutcome::Clear);
        };

        match self.address_book.validate_state(raw).await {
            Ok(normalized) => Ok(SlotOutcome::Set(Value::from(normalized))),
            Err(MemberError::InvalidState { value }) => {
                dispatcher.utter(format!(
                    "'{value}' is not a US state we recognize. \
                     Please give the two-letter state code."
                ));
                Ok(SlotOutcome::Clear)
            }
            Err(other) => Err(other.into()),
        }
    }
}

/// The address form validator
///
/// Street, city and zip are taken as free text; only the state code is
/// checked.
pub fn validate_address_form(address_book: AddressBook) -> FormValidator {
    FormValidator::new("validate_address_form")
        .slot(slots::ADDRESS_STREET, FreeTextSlot)
        .slot(slots::ADDRESS_CITY, FreeTextSlot)
        .slot(slots::ADDRESS_STATE, StateCodeValidator { address_book })
        .slot(slots::ADDRESS_ZIP, FreeTextSlot)
}
