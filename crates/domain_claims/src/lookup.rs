//! Claim lookup
//!
//! Resolution of a caller-supplied claim ID to a record. Matching is exact
//! string equality against stored IDs; absence is a normal result, not an
//! error - callers surface a "claim not recognized" message and must not
//! proceed to dependent steps such as payment.

use crate::claim::Claim;

/// Finds a claim by exact ID match
pub fn find_claim<'a>(claims: &'a [Claim], claim_id: &str) -> Option<&'a Claim> {
    claims.iter().find(|c| c.id.matches(claim_id))
}

/// Mutable variant of [`find_claim`] for balance mutation
pub fn find_claim_mut<'a>(claims: &'a mut [Claim], claim_id: &str) -> Option<&'a mut Claim> {
    claims.iter_mut().find(|c| c.id.matches(claim_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Balance, ClaimId};
    use crate::claim::ClaimStatus;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn claims() -> Vec<Claim> {
        ["123456", "234567"]
            .into_iter()
            .map(|id| Claim {
                id: ClaimId::new(id),
                claim_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                balance: Balance::new(dec!(100)).unwrap(),
                status: ClaimStatus::Approved,
            })
            .collect()
    }

    #[test]
    fn test_find_known_claim() {
        let claims = claims();
        let claim = find_claim(&claims, "234567").unwrap();
        assert_eq!(claim.id.as_str(), "234567");
    }

    #[test]
    fn test_unknown_claim_is_absent() {
        let claims = claims();
        assert!(find_claim(&claims, "999999").is_none());
        // near-misses are absent too - matching is exact
        assert!(find_claim(&claims, "12345").is_none());
        assert!(find_claim(&claims, " 123456").is_none());
    }
}
