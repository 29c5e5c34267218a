// ABOUTME: Event handling for keyboard input in the wizard
// Maps crossterm key events to app events and applies them to state

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::app::AppState;

/// High-level actions the wizard responds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    /// Advance to the next step (or launch, from the preview step)
    Submit,
    /// Go back one step (or exit, from the first step)
    Back,
    NextField,
    PrevField,
    InputChar(char),
    Backspace,
    /// Cycle the focused selector forward
    SelectorNext,
    /// Cycle the focused selector backward
    SelectorPrev,
    /// Discard all entered data and start over
    ResetFlow,
}

pub struct EventHandler;

impl EventHandler {
    /// Translate a raw key event into an app event for the current state
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Help overlay swallows everything except its own toggle
        if state.help_visible {
            return match key_event.code {
                KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('q') => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        if let KeyCode::F(1) = key_event.code {
            return Some(AppEvent::ToggleHelp);
        }

        // Global chords work from any step, including while editing text
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return match key_event.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(AppEvent::Quit),
                KeyCode::Char('r') => Some(AppEvent::ResetFlow),
                _ => None,
            };
        }

        let on_selector = state.focused().is_some_and(|f| f.is_selector());

        match key_event.code {
            KeyCode::Esc => Some(AppEvent::Back),
            KeyCode::Enter => Some(AppEvent::Submit),
            KeyCode::Tab | KeyCode::Down => Some(AppEvent::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::PrevField),
            KeyCode::Left if on_selector => Some(AppEvent::SelectorPrev),
            KeyCode::Right if on_selector => Some(AppEvent::SelectorNext),
            KeyCode::Char(' ') if on_selector => Some(AppEvent::SelectorNext),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Char(ch) => Some(AppEvent::InputChar(ch)),
            _ => None,
        }
    }

    /// Apply an app event to the state
    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::Submit => {
                debug!("submit from step {}", state.current_step());
                state.submit_step();
            }
            AppEvent::Back => state.back_step(),
            AppEvent::NextField => state.next_field(),
            AppEvent::PrevField => state.prev_field(),
            AppEvent::InputChar(ch) => state.input_char(ch),
            AppEvent::Backspace => state.backspace(),
            AppEvent::SelectorNext => state.selector_next(),
            AppEvent::SelectorPrev => state.selector_prev(),
            AppEvent::ResetFlow => {
                debug!("reset requested from step {}", state.current_step());
                state.reset_flow();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::OnboardingStep;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let state = AppState::default();
        let event = EventHandler::handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &state,
        );
        assert_eq!(event, Some(AppEvent::Quit));
    }

    #[test]
    fn test_plain_chars_are_input() {
        let state = AppState::default();
        let event = EventHandler::handle_key_event(key(KeyCode::Char('c')), &state);
        assert_eq!(event, Some(AppEvent::InputChar('c')));
    }

    #[test]
    fn test_arrows_cycle_selector_only_on_selector_field() {
        let mut state = AppState::default();
        // Username step: Left is ignored, not a selector action
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Left), &state),
            None
        );

        state.store.set_step(OnboardingStep::Payment);
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Right), &state),
            Some(AppEvent::SelectorNext)
        );
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut state = AppState::default();
        state.toggle_help();

        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Enter), &state),
            None
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Esc), &state),
            Some(AppEvent::ToggleHelp)
        );
    }

    #[test]
    fn test_enter_advances_step() {
        let mut state = AppState::default();
        let event = EventHandler::handle_key_event(key(KeyCode::Enter), &state).unwrap();
        EventHandler::process_event(event, &mut state);
        assert_eq!(state.current_step(), OnboardingStep::Profile);
    }
}
