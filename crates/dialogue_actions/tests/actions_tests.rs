//! Conversation-level tests for the action set
//!
//! Each test drives one action the way the runtime would: a snapshot in,
//! slot events and messages out, with the stores in memory.

use std::sync::Arc;

use rust_decimal_macros::dec;
use serde_json::{json, Value};

use dialogue_actions::actions::build_registry;
use dialogue_actions::{ActionRegistry, ActionError, Event, Tracker};
use domain_claims::ClaimLedger;
use domain_member::AddressBook;
use domain_quote::QuoteService;
use test_utils::builders::{address, claim};
use test_utils::stores::{
    InMemoryClaimStore, InMemoryMemberStore, InMemoryRateStore, UnreachableStore,
};

struct Fixture {
    registry: ActionRegistry,
    claim_store: Arc<InMemoryClaimStore>,
    member_store: Arc<InMemoryMemberStore>,
}

fn fixture(claims: Vec<domain_claims::Claim>) -> Fixture {
    let claim_store = Arc::new(InMemoryClaimStore::new(claims));
    let member_store = Arc::new(InMemoryMemberStore::new(address(
        "12 Elm St",
        "Springfield",
        "IL",
        "62704",
    )));
    let rate_store = Arc::new(InMemoryRateStore::new());

    let registry = build_registry(
        ClaimLedger::new(claim_store.clone()),
        AddressBook::new(member_store.clone()),
        QuoteService::new(rate_store),
    );

    Fixture {
        registry,
        claim_store,
        member_store,
    }
}

fn tracker(slots: &[(&str, Value)]) -> Tracker {
    Tracker {
        sender_id: "123456".to_string(),
        slots: slots
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
        ..Default::default()
    }
}

fn message_text(response: &dialogue_actions::ActionResponse) -> String {
    response
        .responses
        .iter()
        .filter_map(|m| m.text.as_deref())
        .collect::<Vec<_>>()
        .join("\n")
}

fn slot_event<'a>(events: &'a [Event], slot: &str) -> Option<&'a Value> {
    events.iter().find_map(|e| match e {
        Event::Slot { name, value } if name == slot => Some(value),
        _ => None,
    })
}

// ============================================================================
// Payment flow
// ============================================================================

mod pay_claim_tests {
    use super::*;

    #[tokio::test]
    async fn valid_payment_is_applied_and_reported() {
        let fx = fixture(vec![claim("123456", dec!(100))]);
        let snapshot = tracker(&[("claim_id", json!("123456")), ("payment_amount", json!("40"))]);

        let response = fx.registry.dispatch("action_pay_claim", &snapshot).await.unwrap();

        assert!(message_text(&response).contains("new balance is $60.00"));
        let stored = fx.claim_store.snapshot();
        assert_eq!(stored[0].balance.amount(), dec!(60));
    }

    #[tokio::test]
    async fn overdraft_is_rejected_with_clamped_offer_and_store_untouched() {
        let fx = fixture(vec![claim("123456", dec!(100))]);
        let snapshot = tracker(&[("claim_id", json!("123456")), ("payment_amount", json!("150"))]);

        let response = fx.registry.dispatch("action_pay_claim", &snapshot).await.unwrap();

        // clamped to the pre-payment balance, balance not mutated
        assert!(message_text(&response).contains("pay up to $100.00"));
        assert_eq!(fx.claim_store.snapshot()[0].balance.amount(), dec!(100));
        // the amount slot is cleared for a re-prompt, the claim slot kept
        assert!(slot_event(&response.events, "payment_amount").unwrap().is_null());
        assert!(slot_event(&response.events, "claim_id").is_none());
    }

    #[tokio::test]
    async fn fully_paid_claim_never_prompts_for_an_amount() {
        let fx = fixture(vec![claim("234567", dec!(0))]);

        // the form's required slots exclude the amount
        let form_snapshot = tracker(&[("claim_id", json!("234567"))]);
        let response = fx
            .registry
            .dispatch("validate_pay_claim_form", &form_snapshot)
            .await
            .unwrap();
        let required = slot_event(&response.events, "required_slots").unwrap();
        assert_eq!(required, &json!(["claim_id"]));

        // and the submit action explains instead of paying
        let response = fx
            .registry
            .dispatch("action_pay_claim", &form_snapshot)
            .await
            .unwrap();
        assert!(message_text(&response).contains("no payment to make"));
    }

    #[tokio::test]
    async fn amount_parse_failures_render_differently() {
        let fx = fixture(vec![claim("123456", dec!(100))]);

        let snapshot = tracker(&[("payment_amount", json!("forty"))]);
        let response = fx
            .registry
            .dispatch("validate_pay_claim_form", &snapshot)
            .await
            .unwrap();
        assert!(message_text(&response).contains("doesn't look like a number"));
        assert!(slot_event(&response.events, "payment_amount").unwrap().is_null());

        let snapshot = tracker(&[("payment_amount", json!("-5"))]);
        let response = fx
            .registry
            .dispatch("validate_pay_claim_form", &snapshot)
            .await
            .unwrap();
        assert!(message_text(&response).contains("more than zero"));
    }

    #[tokio::test]
    async fn unknown_claim_is_cleared_with_a_message() {
        let fx = fixture(vec![claim("123456", dec!(100))]);
        let snapshot = tracker(&[("claim_id", json!("999999"))]);

        let response = fx
            .registry
            .dispatch("validate_pay_claim_form", &snapshot)
            .await
            .unwrap();

        assert!(message_text(&response).contains("not valid"));
        assert!(slot_event(&response.events, "claim_id").unwrap().is_null());
    }
}

// ============================================================================
// Claim status flow
// ============================================================================

mod claim_status_tests {
    use super::*;

    #[tokio::test]
    async fn knowing_the_id_requires_the_id_slot() {
        let fx = fixture(vec![claim("123456", dec!(100))]);
        let snapshot = tracker(&[("knows_claim_id", json!("/affirm"))]);

        let response = fx
            .registry
            .dispatch("validate_claim_status_form", &snapshot)
            .await
            .unwrap();

        let required = slot_event(&response.events, "required_slots").unwrap();
        assert_eq!(required, &json!(["knows_claim_id", "claim_id"]));
    }

    #[tokio::test]
    async fn not_knowing_the_id_branches_to_recent_claims() {
        let fx = fixture(vec![claim("123456", dec!(100))]);
        let snapshot = tracker(&[("knows_claim_id", json!("/deny"))]);

        let response = fx
            .registry
            .dispatch("validate_claim_status_form", &snapshot)
            .await
            .unwrap();

        let required = slot_event(&response.events, "required_slots").unwrap();
        assert_eq!(required, &json!(["knows_claim_id", "recent_claims"]));
    }

    #[tokio::test]
    async fn status_is_reported_and_bookkeeping_slots_reset() {
        let fx = fixture(vec![claim("123456", dec!(100))]);
        let snapshot = tracker(&[("claim_id", json!("123456"))]);

        let response = fx
            .registry
            .dispatch("action_claim_status", &snapshot)
            .await
            .unwrap();

        let text = message_text(&response);
        assert!(text.contains("Claim 123456"));
        assert!(text.contains("$100.00"));
        assert!(slot_event(&response.events, "knows_claim_id").unwrap().is_null());
        assert!(slot_event(&response.events, "claim_id").unwrap().is_null());
    }
}

// ============================================================================
// Recent claims browsing
// ============================================================================

mod recent_claims_tests {
    use super::*;

    fn seven_claims() -> Vec<domain_claims::Claim> {
        (0..7).map(|i| claim(&format!("10000{i}"), dec!(50))).collect()
    }

    #[tokio::test]
    async fn first_page_lists_three_and_offers_more() {
        let fx = fixture(seven_claims());
        let snapshot = tracker(&[]);

        let response = fx
            .registry
            .dispatch("action_recent_claims", &snapshot)
            .await
            .unwrap();

        let text = message_text(&response);
        assert!(text.contains("100000"));
        assert!(text.contains("100002"));
        assert!(!text.contains("100003"));
        assert!(text.contains("next"));
        assert_eq!(slot_event(&response.events, "claims_page_index"), Some(&json!(0)));
    }

    #[tokio::test]
    async fn next_from_the_last_page_stays_on_the_last_page() {
        let fx = fixture(seven_claims());
        let snapshot = tracker(&[
            ("claims_page_index", json!(6)),
            ("claims_page_direction", json!("next")),
        ]);

        let response = fx
            .registry
            .dispatch("action_recent_claims", &snapshot)
            .await
            .unwrap();

        assert_eq!(slot_event(&response.events, "claims_page_index"), Some(&json!(6)));
        assert!(message_text(&response).contains("That's all of them."));
    }

    #[tokio::test]
    async fn prev_from_the_first_page_stays_at_zero() {
        let fx = fixture(seven_claims());
        let snapshot = tracker(&[
            ("claims_page_index", json!(0)),
            ("claims_page_direction", json!("prev")),
        ]);

        let response = fx
            .registry
            .dispatch("action_recent_claims", &snapshot)
            .await
            .unwrap();

        assert_eq!(slot_event(&response.events, "claims_page_index"), Some(&json!(0)));
    }

    #[tokio::test]
    async fn empty_store_says_so() {
        let fx = fixture(vec![]);
        let snapshot = tracker(&[]);

        let response = fx
            .registry
            .dispatch("action_recent_claims", &snapshot)
            .await
            .unwrap();

        assert!(message_text(&response).contains("no claims on file"));
    }
}

// ============================================================================
// Address flow
// ============================================================================

mod address_tests {
    use super::*;

    #[tokio::test]
    async fn current_address_is_read_back() {
        let fx = fixture(vec![]);
        let response = fx
            .registry
            .dispatch("action_get_address", &tracker(&[]))
            .await
            .unwrap();
        assert!(message_text(&response).contains("12 Elm St, Springfield, IL 62704"));
    }

    #[tokio::test]
    async fn bad_state_code_is_rejected_and_echoed() {
        let fx = fixture(vec![]);
        let snapshot = tracker(&[("address_state", json!("zz"))]);

        let response = fx
            .registry
            .dispatch("validate_address_form", &snapshot)
            .await
            .unwrap();

        assert!(message_text(&response).contains("'zz'"));
        assert!(slot_event(&response.events, "address_state").unwrap().is_null());
    }

    #[tokio::test]
    async fn state_code_is_normalized_to_uppercase() {
        let fx = fixture(vec![]);
        let snapshot = tracker(&[("address_state", json!("tx"))]);

        let response = fx
            .registry
            .dispatch("validate_address_form", &snapshot)
            .await
            .unwrap();

        assert_eq!(slot_event(&response.events, "address_state"), Some(&json!("TX")));
    }

    #[tokio::test]
    async fn confirmed_change_overwrites_wholesale() {
        let fx = fixture(vec![]);
        let snapshot = tracker(&[
            ("address_street", json!("9 Oak Ave")),
            ("address_city", json!("Austin")),
            ("address_state", json!("TX")),
            ("address_zip", json!("78701")),
            ("confirm_address", json!("/affirm")),
        ]);

        let response = fx
            .registry
            .dispatch("action_update_address", &snapshot)
            .await
            .unwrap();

        assert!(message_text(&response).contains("9 Oak Ave, Austin, TX 78701"));
        assert_eq!(fx.member_store.current_address().city, "Austin");
    }

    #[tokio::test]
    async fn denied_change_reverts_without_mutating() {
        let fx = fixture(vec![]);
        let snapshot = tracker(&[
            ("address_street", json!("9 Oak Ave")),
            ("address_city", json!("Austin")),
            ("address_state", json!("TX")),
            ("address_zip", json!("78701")),
            ("confirm_address", json!("/deny")),
        ]);

        let response = fx
            .registry
            .dispatch("action_update_address", &snapshot)
            .await
            .unwrap();

        assert!(message_text(&response).contains("No changes made"));
        assert_eq!(fx.member_store.current_address().street, "12 Elm St");
    }
}

// ============================================================================
// Quote flow
// ============================================================================

mod quote_tests {
    use super::*;

    #[tokio::test]
    async fn confirmed_quote_is_uttered() {
        let fx = fixture(vec![]);
        let snapshot = tracker(&[
            ("insurance_type", json!("home")),
            ("age", json!(40)),
            ("confirm_quote", json!("yes")),
        ]);

        let response = fx.registry.dispatch("action_get_quote", &snapshot).await.unwrap();

        // baseline 120.00, no age loading at 40
        assert!(message_text(&response).contains("$120.00 per month"));
        assert!(slot_event(&response.events, "age").unwrap().is_null());
    }

    #[tokio::test]
    async fn unconfirmed_quote_is_canceled() {
        let fx = fixture(vec![]);
        let snapshot = tracker(&[
            ("insurance_type", json!("home")),
            ("age", json!(40)),
            ("confirm_quote", json!("/deny")),
        ]);

        let response = fx.registry.dispatch("action_get_quote", &snapshot).await.unwrap();
        assert!(message_text(&response).contains("Canceled."));
    }

    #[tokio::test]
    async fn non_numeric_age_clears_the_slot() {
        let fx = fixture(vec![]);
        let snapshot = tracker(&[("age", json!("thirty"))]);

        let response = fx
            .registry
            .dispatch("validate_quote_form", &snapshot)
            .await
            .unwrap();

        assert!(slot_event(&response.events, "age").unwrap().is_null());
        assert!(response
            .responses
            .iter()
            .any(|m| m.template.as_deref() == Some("utter_age_invalid")));
    }

    #[tokio::test]
    async fn young_driver_pays_the_loading() {
        let fx = fixture(vec![]);
        let snapshot = tracker(&[
            ("insurance_type", json!("auto")),
            ("age", json!(19)),
            ("confirm_quote", json!("yes")),
        ]);

        let response = fx.registry.dispatch("action_get_quote", &snapshot).await.unwrap();
        // 95.00 * 1.35
        assert!(message_text(&response).contains("$128.25 per month"));
    }
}

// ============================================================================
// Error taxonomy
// ============================================================================

mod error_tests {
    use super::*;

    #[tokio::test]
    async fn unknown_action_is_a_request_error() {
        let fx = fixture(vec![]);
        let result = fx.registry.dispatch("action_nonexistent", &tracker(&[])).await;
        assert!(matches!(result, Err(ActionError::UnknownAction(_))));
    }

    #[tokio::test]
    async fn unreachable_store_surfaces_as_service_unavailable() {
        let store = Arc::new(UnreachableStore);
        let registry = build_registry(
            ClaimLedger::new(store.clone()),
            AddressBook::new(store.clone()),
            QuoteService::new(store),
        );

        let snapshot = tracker(&[("claim_id", json!("123456")), ("payment_amount", json!("40"))]);
        let err = registry
            .dispatch("action_pay_claim", &snapshot)
            .await
            .unwrap_err();

        assert!(err.is_service_unavailable());
    }
}
