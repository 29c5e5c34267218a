// ABOUTME: Integration tests for event handling: key presses drive the wizard

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fabrica_onboard::app::{AppEvent, AppState, EventHandler};
use fabrica_onboard::onboarding::{OnboardingStep, PaymentProvider};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(state: &mut AppState, code: KeyCode) {
    if let Some(event) = EventHandler::handle_key_event(key(code), state) {
        EventHandler::process_event(event, state);
    }
}

#[test]
fn test_typing_fills_the_focused_field() {
    let mut state = AppState::default();

    for ch in "abebe".chars() {
        press(&mut state, KeyCode::Char(ch));
    }

    assert_eq!(state.store.flow().user_data.username, "abebe");
}

#[test]
fn test_enter_walks_through_all_steps() {
    let mut state = AppState::default();

    for expected in [
        OnboardingStep::Profile,
        OnboardingStep::Payment,
        OnboardingStep::Product,
        OnboardingStep::Preview,
    ] {
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.current_step(), expected);
    }

    // Enter on the preview step launches and quits
    press(&mut state, KeyCode::Enter);
    assert!(state.completed);
    assert!(state.should_quit);
}

#[test]
fn test_esc_goes_back_then_quits() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.current_step(), OnboardingStep::Profile);

    press(&mut state, KeyCode::Esc);
    assert_eq!(state.current_step(), OnboardingStep::Username);
    assert!(!state.should_quit);

    press(&mut state, KeyCode::Esc);
    assert!(state.should_quit);
    assert!(!state.completed);
}

#[test]
fn test_space_selects_a_provider_on_the_payment_step() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Enter); // profile
    press(&mut state, KeyCode::Enter); // payment

    assert_eq!(state.store.flow().payment_data.provider, None);
    press(&mut state, KeyCode::Char(' '));
    assert_eq!(
        state.store.flow().payment_data.provider,
        Some(PaymentProvider::Chapa)
    );
}

#[test]
fn test_typed_data_survives_navigation() {
    let mut state = AppState::default();

    for ch in "abebe".chars() {
        press(&mut state, KeyCode::Char(ch));
    }
    press(&mut state, KeyCode::Enter); // profile
    press(&mut state, KeyCode::Enter); // payment
    press(&mut state, KeyCode::Char(' ')); // select chapa
    press(&mut state, KeyCode::Esc); // back to profile
    press(&mut state, KeyCode::Esc); // back to username

    assert_eq!(state.store.flow().user_data.username, "abebe");
    assert_eq!(
        state.store.flow().payment_data.provider,
        Some(PaymentProvider::Chapa)
    );
}

#[test]
fn test_ctrl_r_resets_everything() {
    let mut state = AppState::default();

    for ch in "abebe".chars() {
        press(&mut state, KeyCode::Char(ch));
    }
    press(&mut state, KeyCode::Enter);

    if let Some(event) = EventHandler::handle_key_event(
        KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        &state,
    ) {
        assert_eq!(event, AppEvent::ResetFlow);
        EventHandler::process_event(event, &mut state);
    }

    assert_eq!(state.current_step(), OnboardingStep::Username);
    assert_eq!(state.store.flow().user_data.username, "");
}

#[test]
fn test_tab_moves_focus_between_fields() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Enter); // profile: full name, bio, avatar

    for ch in "Abebe Bikila".chars() {
        press(&mut state, KeyCode::Char(ch));
    }
    press(&mut state, KeyCode::Tab);
    for ch in "Runner".chars() {
        press(&mut state, KeyCode::Char(ch));
    }

    assert_eq!(state.store.flow().user_data.full_name, "Abebe Bikila");
    assert_eq!(state.store.flow().user_data.bio, "Runner");
}

#[test]
fn test_backspace_edits_the_focused_field() {
    let mut state = AppState::default();

    for ch in "abebex".chars() {
        press(&mut state, KeyCode::Char(ch));
    }
    press(&mut state, KeyCode::Backspace);

    assert_eq!(state.store.flow().user_data.username, "abebe");
}
