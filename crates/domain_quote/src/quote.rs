//! Premium quoting

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::store::RateStore;

/// Youngest age quoted
pub const MIN_QUOTE_AGE: u32 = 18;
/// Oldest age quoted
pub const MAX_QUOTE_AGE: u32 = 100;

/// Lines of insurance the bot quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsuranceType {
    Home,
    Auto,
    Life,
}

impl InsuranceType {
    /// Store key for this line
    pub fn key(&self) -> &'static str {
        match self {
            InsuranceType::Home => "home",
            InsuranceType::Auto => "auto",
            InsuranceType::Life => "life",
        }
    }
}

impl FromStr for InsuranceType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(InsuranceType::Home),
            "auto" | "car" => Ok(InsuranceType::Auto),
            "life" => Ok(InsuranceType::Life),
            other => Err(QuoteError::UnknownInsuranceType(other.to_string())),
        }
    }
}

/// Validates the age slot
///
/// The value must parse as a whole number and fall in the quotable range;
/// the two failures are distinct so the form can re-prompt differently.
pub fn validate_age(text: &str) -> Result<u32, QuoteError> {
    let age: u32 = text
        .trim()
        .parse()
        .map_err(|_| QuoteError::AgeNotANumber(text.trim().to_string()))?;

    if !(MIN_QUOTE_AGE..=MAX_QUOTE_AGE).contains(&age) {
        return Err(QuoteError::AgeOutOfRange(age));
    }
    Ok(age)
}

/// A quoted monthly premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEstimate {
    pub insurance_type: InsuranceType,
    pub monthly_premium: Decimal,
}

impl QuoteEstimate {
    /// User-facing quote line
    pub fn format(&self) -> String {
        format!(
            "Your estimated {} premium is ${:.2} per month.",
            self.insurance_type.key(),
            self.monthly_premium
        )
    }
}

/// Age loading applied to the baseline rate
///
/// Under-25 and 65-plus members carry a surcharge; everyone else pays the
/// baseline.
fn age_loading(age: u32) -> Decimal {
    if age < 25 {
        Decimal::new(135, 2) // 1.35
    } else if age >= 65 {
        Decimal::new(125, 2) // 1.25
    } else {
        Decimal::ONE
    }
}

/// Quoting over the rate store
#[derive(Clone)]
pub struct QuoteService {
    store: Arc<dyn RateStore>,
}

impl QuoteService {
    /// Creates a quote service over the given store handle
    pub fn new(store: Arc<dyn RateStore>) -> Self {
        Self { store }
    }

    /// Estimates the monthly premium for a line and validated age
    pub async fn quote(
        &self,
        insurance_type: InsuranceType,
        age: u32,
    ) -> Result<QuoteEstimate, QuoteError> {
        let base = self.store.baseline_rate(insurance_type).await?;
        let monthly_premium = (base * age_loading(age)).round_dp(2);
        Ok(QuoteEstimate {
            insurance_type,
            monthly_premium,
        })
    }
}
