// ABOUTME: Integration tests for the onboarding flow controller and store
// Covers navigation clamping, partial updates, reset and the full scenario

use fabrica_onboard::onboarding::{
    InvalidStepError, OnboardingFlow, OnboardingStep, OnboardingStore, PaymentDataPatch,
    PaymentProvider, ProductData, ProductDataPatch, UserDataPatch,
};
use pretty_assertions::assert_eq;

#[test]
fn test_starts_at_username_with_empty_buckets() {
    let flow = OnboardingFlow::new();
    assert_eq!(flow.current_step, OnboardingStep::Username);
    assert_eq!(flow.user_data.username, "");
    assert_eq!(flow.payment_data.provider, None);
    assert_eq!(flow.product_data, ProductData::default());
}

#[test]
fn test_next_step_walks_the_fixed_sequence() {
    let mut flow = OnboardingFlow::new();

    let mut seen = vec![flow.current_step];
    for _ in 0..6 {
        flow.next_step();
        seen.push(flow.current_step);
    }

    assert_eq!(
        seen,
        vec![
            OnboardingStep::Username,
            OnboardingStep::Profile,
            OnboardingStep::Payment,
            OnboardingStep::Product,
            OnboardingStep::Preview,
            // Idempotent once the end is reached
            OnboardingStep::Preview,
            OnboardingStep::Preview,
        ]
    );
}

#[test]
fn test_prev_step_walks_back_and_clamps() {
    let mut flow = OnboardingFlow::new();
    flow.set_step(OnboardingStep::Preview);

    let mut seen = Vec::new();
    for _ in 0..6 {
        flow.prev_step();
        seen.push(flow.current_step);
    }

    assert_eq!(
        seen,
        vec![
            OnboardingStep::Product,
            OnboardingStep::Payment,
            OnboardingStep::Profile,
            OnboardingStep::Username,
            OnboardingStep::Username,
            OnboardingStep::Username,
        ]
    );
}

#[test]
fn test_set_step_then_prev() {
    let mut flow = OnboardingFlow::new();
    flow.set_step(OnboardingStep::Profile);
    flow.prev_step();
    assert_eq!(flow.current_step, OnboardingStep::Username);
}

#[test]
fn test_update_user_data_leaves_other_buckets_alone() {
    let mut flow = OnboardingFlow::new();

    flow.update_user_data(UserDataPatch {
        username: Some("testuser".to_string()),
        ..Default::default()
    });

    assert_eq!(flow.user_data.username, "testuser");
    assert_eq!(flow.payment_data, OnboardingFlow::new().payment_data);
    assert_eq!(flow.product_data, OnboardingFlow::new().product_data);
}

#[test]
fn test_payment_update_preserves_earlier_fields() {
    let mut flow = OnboardingFlow::new();

    flow.update_payment_data(PaymentDataPatch {
        account_number: Some("0911223344".to_string()),
        ..Default::default()
    });
    flow.update_payment_data(PaymentDataPatch {
        provider: Some(Some(PaymentProvider::Chapa)),
        ..Default::default()
    });

    assert_eq!(flow.payment_data.provider, Some(PaymentProvider::Chapa));
    assert_eq!(flow.payment_data.account_number, "0911223344");
}

#[test]
fn test_reset_after_updates_and_navigation() {
    let mut flow = OnboardingFlow::new();
    flow.update_user_data(UserDataPatch {
        username: Some("testuser".to_string()),
        ..Default::default()
    });
    flow.update_product_data(ProductDataPatch {
        title: Some("My Product".to_string()),
        ..Default::default()
    });
    flow.next_step();
    flow.next_step();

    flow.reset();

    assert_eq!(flow.current_step, OnboardingStep::Username);
    assert_eq!(flow.user_data.username, "");
    assert_eq!(flow.product_data.title, "");
    assert_eq!(flow, OnboardingFlow::default());
}

// The end-to-end scenario: a merchant enters a username, moves on, connects
// Chapa, and moves on again.
#[test]
fn test_merchant_walkthrough() {
    let mut store = OnboardingStore::new();

    store.update_user_data(UserDataPatch {
        username: Some("abebe".to_string()),
        ..Default::default()
    });
    store.next_step();
    store.update_payment_data(PaymentDataPatch {
        provider: Some(Some(PaymentProvider::Chapa)),
        ..Default::default()
    });
    store.next_step();

    assert_eq!(store.current_step(), OnboardingStep::Payment);
    assert_eq!(store.flow().user_data.username, "abebe");
    assert_eq!(
        store.flow().payment_data.provider,
        Some(PaymentProvider::Chapa)
    );
}

#[test]
fn test_step_identifiers_parse_and_display() {
    assert_eq!(
        "payment".parse::<OnboardingStep>(),
        Ok(OnboardingStep::Payment)
    );
    assert_eq!(OnboardingStep::Preview.to_string(), "preview");

    let err = "summary".parse::<OnboardingStep>().unwrap_err();
    assert_eq!(err, InvalidStepError("summary".to_string()));
    assert!(err.to_string().contains("invalid onboarding step"));
}
