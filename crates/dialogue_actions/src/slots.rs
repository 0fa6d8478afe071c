//! Slot names shared with the runtime's domain file
//!
//! One constant per slot keeps the action code and the runtime's slot
//! mapping from drifting apart silently.

/// The slot a form is currently prompting for (runtime-owned)
pub const REQUESTED_SLOT: &str = "requested_slot";

// claim status / browsing
pub const KNOWS_CLAIM_ID: &str = "knows_claim_id";
pub const CLAIM_ID: &str = "claim_id";
pub const RECENT_CLAIMS: &str = "recent_claims";
pub const CLAIMS_PAGE_INDEX: &str = "claims_page_index";
pub const CLAIMS_PAGE_DIRECTION: &str = "claims_page_direction";

// payment
pub const PAYMENT_AMOUNT: &str = "payment_amount";

// claim filing
pub const CLAIM_AMOUNT: &str = "claim_amount";

// address change
pub const ADDRESS_STREET: &str = "address_street";
pub const ADDRESS_CITY: &str = "address_city";
pub const ADDRESS_STATE: &str = "address_state";
pub const ADDRESS_ZIP: &str = "address_zip";
pub const CONFIRM_ADDRESS: &str = "confirm_address";

// quote
pub const INSURANCE_TYPE: &str = "insurance_type";
pub const AGE: &str = "age";
pub const CONFIRM_QUOTE: &str = "confirm_quote";
