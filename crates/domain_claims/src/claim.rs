//! Claim records

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Balance, ClaimId, PaymentAmount};

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Filed, not yet decided
    Pending,
    /// Approved, balance may still be outstanding
    Approved,
    /// Denied
    Denied,
    /// Balance paid down to zero
    Paid,
}

/// A claim as held in the member store
///
/// Identity is `id`, unique within the store. The balance is the only
/// field this service mutates; claims are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Store-issued identifier
    pub id: ClaimId,
    /// Date the claim was filed
    pub claim_date: NaiveDate,
    /// Outstanding balance
    pub balance: Balance,
    /// Status
    pub status: ClaimStatus,
}

impl Claim {
    /// Files a new claim
    ///
    /// The ID is generated ("NC"-prefixed, fixed-length numeric), the date
    /// is stamped with today, and the claim starts out Pending.
    pub fn file_new(balance: Balance) -> Self {
        Self {
            id: ClaimId::generate_filed(),
            claim_date: Utc::now().date_naive(),
            balance,
            status: ClaimStatus::Pending,
        }
    }

    /// Returns true if nothing is outstanding on this claim
    pub fn is_fully_paid(&self) -> bool {
        self.balance.is_zero()
    }

    /// Applies a payment to this claim in place
    ///
    /// A payment larger than the outstanding balance is refused: the
    /// balance stays untouched and the outcome carries the clamped value
    /// (the pre-payment balance) so the caller can re-offer it. On
    /// acceptance the balance decrements, and a claim paid down to zero
    /// moves to [`ClaimStatus::Paid`].
    pub fn apply_payment(&mut self, amount: PaymentAmount) -> crate::ledger::PaymentOutcome {
        use crate::ledger::PaymentOutcome;

        match self.balance.deduct(amount) {
            Some(new_balance) => {
                self.balance = new_balance;
                if new_balance.is_zero() {
                    self.status = ClaimStatus::Paid;
                }
                PaymentOutcome::Accepted { new_balance }
            }
            None => PaymentOutcome::ExceedsBalance {
                clamped: self.balance,
            },
        }
    }

    /// One-line summary used when listing claims to the member
    pub fn summary(&self) -> String {
        format!(
            "Claim {} ({}): {:?}, {} outstanding",
            self.id,
            self.claim_date.format("%Y-%m-%d"),
            self.status,
            self.balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_file_new_shape() {
        let claim = Claim::file_new(Balance::new(dec!(500)).unwrap());

        assert!(claim.id.as_str().starts_with("NC"));
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claim.balance.amount(), dec!(500));
        assert!(!claim.is_fully_paid());
    }

    #[test]
    fn test_paid_down_to_zero_flips_status() {
        let mut claim = Claim::file_new(Balance::new(dec!(100)).unwrap());
        let outcome = claim.apply_payment(PaymentAmount::parse("100").unwrap());

        assert!(outcome.accepted());
        assert!(claim.is_fully_paid());
        assert_eq!(claim.status, ClaimStatus::Paid);
    }

    #[test]
    fn test_summary_mentions_id_and_balance() {
        let claim = Claim::file_new(Balance::new(dec!(250)).unwrap());
        let line = claim.summary();

        assert!(line.contains(claim.id.as_str()));
        assert!(line.contains("$250.00"));
    }
}
