//! Claim payment flow
//!
//! Validation is ordered, and each failure renders differently: the
//! amount must parse as a positive number (form validator), must not
//! exceed the outstanding balance (ledger, at apply time), and a claim
//! with nothing outstanding never enters the payment form at all
//! (required-slots gate).

use async_trait::async_trait;
use serde_json::Value;

use core_kernel::{AmountError, PaymentAmount};
use domain_claims::{ClaimError, ClaimLedger, PaymentOutcome};

use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::error::ActionError;
use crate::events::Event;
use crate::forms::{FormValidator, RequiredSlots, SlotOutcome, SlotValidator};
use crate::slots;
use crate::tracker::Tracker;

/// Applies the collected payment to the collected claim
pub struct PayClaimAction {
    ledger: ClaimLedger,
}

impl PayClaimAction {
    pub fn new(ledger: ClaimLedger) -> Self {
        Self { ledger }
    }

    fn done_events() -> Vec<Event> {
        vec![
            Event::clear_slot(slots::CLAIM_ID),
            Event::clear_slot(slots::PAYMENT_AMOUNT),
            Event::clear_slot(slots::KNOWS_CLAIM_ID),
        ]
    }
}

#[async_trait]
impl Action for PayClaimAction {
    fn name(&self) -> &'static str {
        "action_pay_claim"
    }

    async fn run(
        &self,
        tracker: &Tracker,
        dispatcher: &mut Dispatcher,
    ) -> Result<Vec<Event>, ActionError> {
        let claim_id = tracker
            .slot_str(slots::CLAIM_ID)
            .ok_or(ActionError::MissingSlot(slots::CLAIM_ID))?
            .to_string();

        match self.ledger.is_fully_paid(&claim_id).await {
            Ok(false) => {}
            Ok(true) => {
                dispatcher.utter(format!(
                    "Claim {claim_id} has nothing outstanding, so there is no payment to make."
                ));
                return Ok(Self::done_events());
            }
            Err(ClaimError::NotFound(_)) => {
                dispatcher.utter(
                    "The Claim ID you entered is not valid. Please check and try again.",
                );
                return Ok(vec![Event::clear_slot(slots::CLAIM_ID)]);
            }
            Err(other) => return Err(other.into()),
        }

        let raw_amount = tracker
            .slot_str(slots::PAYMENT_AMOUNT)
            .ok_or(ActionError::MissingSlot(slots::PAYMENT_AMOUNT))?;

        let amount = match PaymentAmount::parse(raw_amount) {
            Ok(amount) => amount,
            Err(_) => {
                // the form validator normally catches this; re-prompt
                dispatcher.utter("I couldn't read that payment amount. Please try again.");
                return Ok(vec![Event::clear_slot(slots::PAYMENT_AMOUNT)]);
            }
        };

        match self.ledger.apply_payment(&claim_id, amount).await {
            Ok(PaymentOutcome::Accepted { new_balance }) => {
                dispatcher.utter(format!(
                    "Payment of {amount} applied to claim {claim_id}. Your new balance is {new_balance}."
                ));
                Ok(Self::done_events())
            }
            Ok(PaymentOutcome::ExceedsBalance { clamped }) => {
                dispatcher.utter(format!(
                    "That's more than the {clamped} outstanding on claim {claim_id}. \
                     You can pay up to {clamped}."
                ));
                Ok(vec![Event::clear_slot(slots::PAYMENT_AMOUNT)])
            }
            Err(ClaimError::NotFound(_)) => {
                dispatcher.utter(
                    "The Claim ID you entered is not valid. Please check and try again.",
                );
                Ok(vec![Event::clear_slot(slots::CLAIM_ID)])
            }
            Err(other) => Err(other.into()),
        }
    }
}

/// Validates the claim being paid: it must exist
pub struct PayableClaimValidator {
    ledger: ClaimLedger,
}

#[async_trait]
impl SlotValidator for PayableClaimValidator {
    async fn validate(
        &self,
        value: &Value,
        _tracker: &Tracker,
        dispatcher: &mut Dispatcher,
    ) -> Result<SlotOutcome, ActionError> {
        let Some(raw) = value.as_str() else {
            return Ok(SlotOutcome::Clear);
        };

        match self.ledger.is_fully_paid(raw.trim()).await {
            Ok(_) => Ok(SlotOutcome::Set(Value::from(raw.trim()))),
            Err(ClaimError::NotFound(_)) => {
                dispatcher
                    .utter("The Claim ID you entered is not valid. Please check and try again.");
                Ok(SlotOutcome::Clear)
            }
            Err(other) => Err(other.into()),
        }
    }
}

/// Validates the payment amount: parse stage only
///
/// The balance comparison happens at apply time in the ledger, which is
/// also where the clamped re-offer comes from.
pub struct PaymentAmountValidator;

#[async_trait]
impl SlotValidator for PaymentAmountValidator {
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
                dispatcher.utter("The payment amount must be more than zero.");
                Ok(SlotOutcome::Clear)
            }
            Err(_) => {
                dispatcher.utter(format!("'{}' doesn't look like a number.", raw.trim()));
                Ok(SlotOutcome::Clear)
            }
        }
    }
}

/// Skips the amount prompt entirely for a fully paid claim
struct PayClaimSlots {
    ledger: ClaimLedger,
}

#[async_trait]
impl RequiredSlots for PayClaimSlots {
    async fn required_slots(
        &self,
        tracker: &Tracker,
        _dispatcher: &mut Dispatcher,
    ) -> Result<Vec<String>, ActionError> {
        let mut required = vec![slots::CLAIM_ID.to_string()];

        if let Some(claim_id) = tracker.slot_str(slots::CLAIM_ID) {
            match self.ledger.is_fully_paid(claim_id).await {
                Ok(true) => {}
                Ok(false) => required.push(slots::PAYMENT_AMOUNT.to_string()),
                // an invalid id is the validator's problem; keep prompting for it
                Err(ClaimError::NotFound(_)) => {}
                Err(other) => return Err(other.into()),
            }
        } else {
            required.push(slots::PAYMENT_AMOUNT.to_string());
        }

        Ok(required)
    }
}

/// The pay-claim form validator
pub fn validate_pay_claim_form(ledger: ClaimLedger) -> FormValidator {
    FormValidator::new("validate_pay_claim_form")
        .slot(slots::CLAIM_ID, PayableClaimValidator {
            ledger: ledger.clone(),
        })
        .slot(slots::PAYMENT_AMOUNT, PaymentAmountValidator)
        .required_slots(PayClaimSlots { ledger })
}
