// ABOUTME: Third wizard step: connect a payout account
// Provider choice plus account details; the account number stays local-only

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{render_heading, render_selector_field, render_text_field, ACCENT, SOFT_WHITE};
use crate::app::{AppState, StepField};
use crate::onboarding::PaymentProvider;

pub struct StepPayment;

impl StepPayment {
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(1),
                Constraint::Length(3), // Provider selector
                Constraint::Length(3), // Account holder name
                Constraint::Length(3), // Account number
                Constraint::Length(3), // Security note
                Constraint::Min(0),
            ])
            .split(area);

        render_heading(
            frame,
            layout[0],
            "Connect your payment account",
            "Add your payout account to receive payments from customers",
        );

        let provider = state.store.flow().payment_data.provider;
        let options = [
            (
                PaymentProvider::Chapa.label(),
                provider == Some(PaymentProvider::Chapa),
            ),
            (
                PaymentProvider::Telebirr.label(),
                provider == Some(PaymentProvider::Telebirr),
            ),
        ];
        render_selector_field(frame, layout[2], state, StepField::Provider, &options);

        render_text_field(frame, layout[3], state, StepField::AccountName, None);
        render_text_field(frame, layout[4], state, StepField::AccountNumber, None);

        let note = Paragraph::new(Line::from(Span::styled(
            "Your account number is never written to disk; you may be asked to re-enter it if you resume later.",
            Style::default().fg(SOFT_WHITE),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT))
                .title(" Your data is secure "),
        );
        frame.render_widget(note, layout[5]);
    }
}
