// ABOUTME: Fourth wizard step: create the first product listing

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{render_heading, render_selector_field, render_text_field, MUTED_GRAY};
use crate::app::{AppState, StepField};
use crate::onboarding::ProductKind;

pub struct StepProduct;

impl StepProduct {
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(1),
                Constraint::Length(3), // Kind selector
                Constraint::Length(1), // Kind description
                Constraint::Length(3), // Title
                Constraint::Length(3), // Description
                Constraint::Length(3), // Price
                Constraint::Min(0),
            ])
            .split(area);

        render_heading(
            frame,
            layout[0],
            "Create your first product",
            "You can add more and edit everything later",
        );

        let kind = state.store.flow().product_data.kind;
        let options = [
            (ProductKind::Digital.label(), kind == ProductKind::Digital),
            (ProductKind::Booking.label(), kind == ProductKind::Booking),
            (ProductKind::Link.label(), kind == ProductKind::Link),
        ];
        render_selector_field(frame, layout[2], state, StepField::ProductKind, &options);

        let kind_hint = Paragraph::new(Line::from(Span::styled(
            kind.description(),
            Style::default().fg(MUTED_GRAY).add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(kind_hint, layout[3]);

        render_text_field(frame, layout[4], state, StepField::Title, None);
        render_text_field(frame, layout[5], state, StepField::Description, None);
        render_text_field(frame, layout[6], state, StepField::Price, None);
    }
}
