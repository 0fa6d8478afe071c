//! Record builders

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::{Balance, ClaimId};
use domain_claims::{Claim, ClaimStatus};
use domain_member::Address;

/// Builds an approved claim with the given ID and outstanding balance
pub fn claim(id: &str, balance: Decimal) -> Claim {
    Claim {
        id: ClaimId::new(id),
        claim_date: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid fixture date"),
        balance: Balance::new(balance).expect("non-negative fixture balance"),
        status: ClaimStatus::Approved,
    }
}

/// Builds an address
pub fn address(street: &str, city: &str, state: &str, zip: &str) -> Address {
    Address {
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip: zip.to_string(),
    }
}
