//! US state code validation
//!
//! The authoritative list lives in the member store (the 50 states plus
//! DC). [`US_STATE_CODES`] is the canonical seed used to populate stores
//! and test fixtures.

use crate::error::MemberError;

/// The 50 US states plus the District of Columbia
pub const US_STATE_CODES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Checks a state code against the valid set
///
/// Matching is case-insensitive and the accepted code comes back
/// normalized to uppercase. Rejection echoes the input exactly as the
/// user typed it.
pub fn normalize_state(input: &str, valid: &[String]) -> Result<String, MemberError> {
    let candidate = input.trim().to_uppercase();
    if valid.iter().any(|s| s == &candidate) {
        Ok(candidate)
    } else {
        Err(MemberError::InvalidState {
            value: input.to_string(),
        })
    }
}
