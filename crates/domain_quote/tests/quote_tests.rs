//! Tests for the quote service against an in-memory rate store

use std::sync::Arc;

use rust_decimal_macros::dec;

use domain_quote::{InsuranceType, QuoteError, QuoteService};
use test_utils::stores::{InMemoryRateStore, UnreachableStore};

#[tokio::test]
async fn baseline_rate_is_quoted_unloaded_for_middle_ages() {
    let quotes = QuoteService::new(Arc::new(InMemoryRateStore::new()));

    let estimate = quotes.quote(InsuranceType::Home, 40).await.unwrap();
    assert_eq!(estimate.monthly_premium, dec!(120.00));
    assert!(estimate.format().contains("$120.00 per month"));
}

#[tokio::test]
async fn young_and_senior_ages_carry_a_loading() {
    let quotes = QuoteService::new(Arc::new(InMemoryRateStore::new()));

    let young = quotes.quote(InsuranceType::Auto, 19).await.unwrap();
    assert_eq!(young.monthly_premium, dec!(128.25)); // 95.00 * 1.35

    let senior = quotes.quote(InsuranceType::Auto, 70).await.unwrap();
    assert_eq!(senior.monthly_premium, dec!(118.75)); // 95.00 * 1.25
}

#[tokio::test]
async fn overridden_rate_is_used() {
    let store = InMemoryRateStore::new().with_rate(InsuranceType::Life, dec!(80.00));
    let quotes = QuoteService::new(Arc::new(store));

    let estimate = quotes.quote(InsuranceType::Life, 30).await.unwrap();
    assert_eq!(estimate.monthly_premium, dec!(80.00));
}

#[tokio::test]
async fn unreachable_store_propagates() {
    let quotes = QuoteService::new(Arc::new(UnreachableStore));

    let err = quotes.quote(InsuranceType::Home, 40).await.unwrap_err();
    assert!(matches!(err, QuoteError::Store(e) if e.is_unavailable()));
}
