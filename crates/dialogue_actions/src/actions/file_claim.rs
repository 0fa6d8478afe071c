//! New-claim filing

use async_trait::async_trait;
use serde_json::Value;

use core_kernel::{AmountError, Balance, PaymentAmount};
use domain_claims::ClaimLedger;

use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::error::ActionError;
use crate::events::Event;
use crate::forms::{FormValidator, SlotOutcome, SlotValidator};
use crate::slots;
use crate::tracker::Tracker;

/// Files a claim with the collected opening balance
pub struct FileClaimAction {
    ledger: ClaimLedger,
}

impl FileClaimAction {
    pub fn new(ledger: ClaimLedger) -> Self {
        Self { ledger }
    }
}

#[async_trait]
impl Action for FileClaimAction {
    fn name(&self) -> &'static str {
        "action_file_claim"
    }

    async fn run(
        &self,
        tracker: &Tracker,
        dispatcher: &mut Dispatcher,
    ) -> Result<Vec<Event>, ActionError> {
        let raw = tracker
            .slot_str(slots::CLAIM_AMOUNT)
            .ok_or(ActionError::MissingSlot(slots::CLAIM_AMOUNT))?;

        let amount = match PaymentAmount::parse(raw) {
            Ok(amount) => amount,
            Err(_) => {
                dispatcher.utter("I couldn't read that claim amount. Please try again.");
                return Ok(vec![Event::clear_slot(slots::CLAIM_AMOUNT)]);
            }
        };

        let balance = Balance::new(amount.value())
            .unwrap_or_else(|_| Balance::zero());
        let claim = self.ledger.file_claim(balance).await?;

        dispatcher.utter(format!(
            "Your new claim {} has been filed with a balance of {}. \
             You can check its status here any time.",
            claim.id, claim.balance
        ));

        Ok(vec![Event::clear_slot(slots::CLAIM_AMOUNT)])
    }
}

/// Validates the opening claim amount
pub struct ClaimAmountValidator;

#[async_trait]
impl SlotValidator for ClaimAmountValidator {
    async fn validate(
        &self,
        value: &Value,
        _tracker: &Tracker,
        dispatcher: &mut Dispatcher,
    ) -> Result<SlotOutcome, ActionError> {
        let raw = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return Ok(SlotOutcome::Clear),
        };

        match PaymentAmount::parse(&raw) {
            Ok(amount) => Ok(SlotOutcome::Set(Value::from(amount.value().to_string()))),
            Err(AmountError::NotPositive) => {
                dispatcher.utter("The claim amount must be more than zero.");
                Ok(SlotOutcome::Clear)
            }
            Err(_) => {
                dispatcher.utter(format!("'{}' doesn't look like a number.", raw.trim()));
                Ok(SlotOutcome::Clear)
            }
        }
    }
}

/// The file-claim form validator
pub fn validate_file_claim_form() -> FormValidator {
    FormValidator::new("validate_file_claim_form").slot(slots::CLAIM_AMOUNT, ClaimAmountValidator)
}
