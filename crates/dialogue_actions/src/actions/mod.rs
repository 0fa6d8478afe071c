//! Concrete actions
//!
//! One module per conversation flow. [`build_registry`] wires every
//! action and form validator against the injected service handles.

pub mod claim_status;
pub mod recent_claims;
pub mod pay_claim;
pub mod file_claim;
pub mod address;
pub mod quote;

use domain_claims::ClaimLedger;
use domain_member::AddressBook;
use domain_quote::QuoteService;

use crate::registry::ActionRegistry;

/// Registers the full action set for this bot
pub fn build_registry(
    ledger: ClaimLedger,
    address_book: AddressBook,
    quotes: QuoteService,
) -> ActionRegistry {
    ActionRegistry::new()
        .register(claim_status::ClaimStatusAction::new(ledger.clone()))
        .register(claim_status::validate_claim_status_form(ledger.clone()))
        .register(recent_claims::RecentClaimsAction::new(ledger.clone()))
        .register(pay_claim::PayClaimAction::new(ledger.clone()))
        .register(pay_claim::validate_pay_claim_form(ledger.clone()))
        .register(file_claim::FileClaimAction::new(ledger.clone()))
        .register(file_claim::validate_file_claim_form())
        .register(address::GetAddressAction::new(address_book.clone()))
        .register(address::UpdateAddressAction::new(address_book.clone()))
        .register(address::validate_address_form(address_book))
        .register(quote::GetQuoteAction::new(quotes))
        .register(quote::validate_quote_form())
}
