//! Quote flow

use async_trait::async_trait;
use serde_json::Value;

use domain_quote::{validate_age, InsuranceType, QuoteError, QuoteService};
use domain_quote::quote::{MAX_QUOTE_AGE, MIN_QUOTE_AGE};

use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::error::ActionError;
use crate::events::Event;
use crate::forms::{FormValidator, SlotOutcome, SlotValidator};
use crate::slots;
use crate::tracker::Tracker;

/// Quotes a premium once the form is confirmed
pub struct GetQuoteAction {
    quotes: QuoteService,
}

impl GetQuoteAction {
    pub fn new(quotes: QuoteService) -> Self {
        Self { quotes }
    }

    fn done_events() -> Vec<Event> {
        vec![
            Event::clear_slot(slots::INSURANCE_TYPE),
            Event::clear_slot(slots::AGE),
            Event::clear_slot(slots::CONFIRM_QUOTE),
        ]
    }
}

#[async_trait]
impl Action for GetQuoteAction {
    fn name(&self) -> &'static str {
        "action_get_quote"
    }

    async fn run(
        &self,
        tracker: &Tracker,
        dispatcher: &mut Dispatcher,
    ) -> Result<Vec<Event>, ActionError> {
        if !tracker.slot_affirmed(slots::CONFIRM_QUOTE) {
            dispatcher.utter("Canceled.");
            return Ok(Self::done_events());
        }

        let insurance_type: InsuranceType = tracker
            .slot_str(slots::INSURANCE_TYPE)
            .ok_or(ActionError::MissingSlot(slots::INSURANCE_TYPE))?
            .parse()
            .map_err(ActionError::Quote)?;

        let raw_age = match tracker.slot(slots::AGE) {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            _ => return Err(ActionError::MissingSlot(slots::AGE)),
        };
        let age = validate_age(&raw_age).map_err(ActionError::Quote)?;

        let estimate = self.quotes.quote(insurance_type, age).await?;
        dispatcher.utter(format!("Here is your quote. {}", estimate.format()));

        Ok(Self::done_events())
    }
}

/// Validates the insurance-type slot
pub struct InsuranceTypeValidator;

#[async_trait]
impl SlotValidator for InsuranceTypeValidator {
    async fn validate(
        &self,
        value: &Value,
        _tracker: &Tracker,
        dispatcher: &mut Dispatcher,
    ) -> Result<SlotOutcome, ActionError> {
        let Some(raw) = value.as_str() else {
            return Ok(SlotOutcome::Clear);
        };

        match raw.parse::<InsuranceType>() {
            Ok(insurance_type) => Ok(SlotOutcome::Set(Value::from(insurance_type.key()))),
            Err(_) => {
                dispatcher.utter(format!(
                    "We don't offer '{}' policies. We can quote home, auto, or life.",
                    raw.trim()
                ));
                Ok(SlotOutcome::Clear)
            }
        }
    }
}

/// Validates the age slot
pub struct AgeValidator;

#[async_trait]
impl SlotValidator for AgeValidator {
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

        match validate_age(&raw) {
            Ok(age) => Ok(SlotOutcome::Set(Value::from(age))),
            Err(QuoteError::AgeOutOfRange(_)) => {
                dispatcher.utter(format!(
                    "We can only quote ages {MIN_QUOTE_AGE} to {MAX_QUOTE_AGE}."
                ));
                Ok(SlotOutcome::Clear)
            }
            Err(_) => {
                dispatcher.utter_template("utter_age_invalid");
                Ok(SlotOutcome::Clear)
            }
        }
    }
}

/// The quote form validator
pub fn validate_quote_form() -> FormValidator {
    FormValidator::new("validate_quote_form")
        .slot(slots::INSURANCE_TYPE, InsuranceTypeValidator)
        .slot(slots::AGE, AgeValidator)
}
