//! Balance and payment-amount types
//!
//! This module provides type-safe representations of claim balances and
//! user-entered payment amounts using rust_decimal, so no arithmetic is
//! done in floating point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when interpreting a user-entered amount
///
/// The two parse failures are distinct variants so callers can render
/// different re-prompts for "that is not a number" and "that must be
/// more than zero".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("amount must be greater than zero")]
    NotPositive,

    #[error("balance cannot be negative: {0}")]
    NegativeBalance(Decimal),
}

/// An outstanding claim balance
///
/// Invariant: never negative. Construction rejects negative values and
/// [`Balance::deduct`] refuses any deduction that would break the
/// invariant, so a `Balance` read from the store or produced by ledger
/// arithmetic is always `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(Decimal);

impl Balance {
    /// Creates a balance, rejecting negative values
    pub fn new(amount: Decimal) -> Result<Self, AmountError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(AmountError::NegativeBalance(amount));
        }
        Ok(Self(amount.round_dp(2)))
    }

    /// A zero balance
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if nothing is outstanding
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Deducts a payment, returning `None` when the payment exceeds the
    /// balance (the balance is left for the caller, unchanged)
    pub fn deduct(&self, payment: PaymentAmount) -> Option<Self> {
        if payment.value() > self.0 {
            return None;
        }
        Some(Self(self.0 - payment.value()))
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// A validated, strictly positive payment amount entered by the user
///
/// Parsing accepts the loose shapes the dialogue runtime's entity
/// extraction produces: surrounding whitespace, a leading `$`, and
/// thousands separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentAmount(Decimal);

impl PaymentAmount {
    /// Parses user text into a positive payment amount
    ///
    /// Validation order matters to callers: a string that is not a number
    /// fails with [`AmountError::NotANumber`]; a parseable but
    /// non-positive value fails with [`AmountError::NotPositive`].
    pub fn parse(text: &str) -> Result<Self, AmountError> {
        let cleaned: String = text
            .trim()
            .trim_start_matches('$')
            .chars()
            .filter(|c| *c != ',')
            .collect();

        let value: Decimal = cleaned
            .parse()
            .map_err(|_| AmountError::NotANumber(text.trim().to_string()))?;

        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }

        Ok(Self(value.round_dp(2)))
    }

    /// Creates a payment amount from an already-validated decimal
    pub fn from_decimal(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }
        Ok(Self(value.round_dp(2)))
    }

    /// Returns the underlying amount
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for PaymentAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
