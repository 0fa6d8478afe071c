//! Claim status flow
//!
//! The member either knows their claim ID (we ask for it and report that
//! claim) or doesn't (we branch into browsing recent claims).

use async_trait::async_trait;
use serde_json::Value;

use domain_claims::{find_claim, ClaimLedger};

use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::error::ActionError;
use crate::events::Event;
use crate::forms::{
    FormValidator, LatestMessageExtractor, RequiredSlots, SlotOutcome, SlotValidator,
};
use crate::slots;
use crate::tracker::Tracker;

/// Reports the status of the claim the form settled on
pub struct ClaimStatusAction {
    ledger: ClaimLedger,
}

impl ClaimStatusAction {
    pub fn new(ledger: ClaimLedger) -> Self {
        Self { ledger }
    }
}

#[async_trait]
impl Action for ClaimStatusAction {
    fn name(&self) -> &'static str {
        "action_claim_status"
    }

    async fn run(
        &self,
        tracker: &Tracker,
        dispatcher: &mut Dispatcher,
    ) -> Result<Vec<Event>, ActionError> {
        let claim_id = tracker
            .slot_str(slots::CLAIM_ID)
            .ok_or(ActionError::MissingSlot(slots::CLAIM_ID))?;

        let claims = self.ledger.claims().await?;
        match find_claim(&claims, claim_id) {
            Some(claim) => {
                dispatcher.utter(format!(
                    "Claim {} was filed on {} and is currently {:?}. The outstanding balance is {}.",
                    claim.id,
                    claim.claim_date.format("%B %-d, %Y"),
                    claim.status,
                    claim.balance
                ));
            }
            None => {
                dispatcher.utter(
                    "The Claim ID you entered is not valid. Please check and try again.",
                );
            }
        }

        Ok(vec![
            Event::clear_slot(slots::KNOWS_CLAIM_ID),
            Event::clear_slot(slots::CLAIM_ID),
            Event::clear_slot(slots::RECENT_CLAIMS),
        ])
    }
}

/// Validates the claim ID against the store
pub struct ClaimIdValidator {
    ledger: ClaimLedger,
}

impl ClaimIdValidator {
    pub fn new(ledger: ClaimLedger) -> Self {
        Self { ledger }
    }
}

#[async_trait]
impl SlotValidator for ClaimIdValidator {
    async fn validate(
        &self,
        value: &Value,
        _tracker: &Tracker,
        dispatcher: &mut Dispatcher,
    ) -> Result<SlotOutcome, ActionError> {
        let Some(raw) = value.as_str() else {
            return Ok(SlotOutcome::Clear);
        };

        let claims = self.ledger.claims().await?;
        if find_claim(&claims, raw.trim()).is_some() {
            Ok(SlotOutcome::Set(Value::from(raw.trim())))
        } else {
            dispatcher.utter("The Claim ID you entered is not valid. Please check and try again.");
            Ok(SlotOutcome::Clear)
        }
    }
}

/// Branches the form on whether the member knows their claim ID
struct ClaimStatusSlots;

#[async_trait]
impl RequiredSlots for ClaimStatusSlots {
    async fn required_slots(
        &self,
        tracker: &Tracker,
        _dispatcher: &mut Dispatcher,
    ) -> Result<Vec<String>, ActionError> {
        let mut required = vec![slots::KNOWS_CLAIM_ID.to_string()];
        if tracker.slot_affirmed(slots::KNOWS_CLAIM_ID) {
            required.push(slots::CLAIM_ID.to_string());
        } else if tracker.slot_denied(slots::KNOWS_CLAIM_ID) {
            required.push(slots::RECENT_CLAIMS.to_string());
        }
        Ok(required)
    }
}

/// The claim-status form validator
pub fn validate_claim_status_form(ledger: ClaimLedger) -> FormValidator {
    FormValidator::new("validate_claim_status_form")
        .extract(
            slots::RECENT_CLAIMS,
            LatestMessageExtractor {
                slot_name: slots::RECENT_CLAIMS,
            },
        )
        .slot(slots::CLAIM_ID, ClaimIdValidator::new(ledger))
        .required_slots(ClaimStatusSlots)
}
