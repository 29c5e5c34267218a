// ABOUTME: TUI components for the onboarding wizard
// One presentation component per step plus the wizard chrome around them

pub mod step_payment;
pub mod step_preview;
pub mod step_product;
pub mod step_profile;
pub mod step_username;
pub mod wizard;

pub use step_payment::StepPayment;
pub use step_preview::StepPreview;
pub use step_product::StepProduct;
pub use step_profile::StepProfile;
pub use step_username::StepUsername;
pub use wizard::WizardComponent;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{AppState, StepField};

// Color palette shared by all wizard components
pub(crate) const ACCENT: Color = Color::Rgb(100, 149, 237);
pub(crate) const GOLD: Color = Color::Rgb(255, 215, 0);
pub(crate) const DONE_GREEN: Color = Color::Rgb(100, 200, 100);
pub(crate) const DARK_BG: Color = Color::Rgb(25, 25, 35);
pub(crate) const PANEL_BG: Color = Color::Rgb(30, 30, 40);
pub(crate) const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
pub(crate) const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
pub(crate) const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

/// Render one labeled text input row, with a block cursor when focused
pub(crate) fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    field: StepField,
    prefix: Option<&str>,
) {
    let focused = state.focused() == Some(field);
    let value = state.field_value(field);

    let border_style = if focused {
        Style::default().fg(GOLD)
    } else {
        Style::default().fg(SUBDUED_BORDER)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" {} ", field.label()))
        .title_style(Style::default().fg(if focused { GOLD } else { MUTED_GRAY }));

    let mut spans = Vec::new();
    if let Some(prefix) = prefix {
        spans.push(Span::styled(prefix, Style::default().fg(MUTED_GRAY)));
    }
    if value.is_empty() && !focused {
        spans.push(Span::styled(
            field.placeholder(),
            Style::default().fg(MUTED_GRAY).add_modifier(Modifier::DIM),
        ));
    } else {
        spans.push(Span::styled(value, Style::default().fg(SOFT_WHITE)));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(GOLD)));
    }

    let input = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(input, area);
}

/// Render a selector row showing each option, highlighting the active one
pub(crate) fn render_selector_field(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    field: StepField,
    options: &[(&str, bool)],
) {
    let focused = state.focused() == Some(field);

    let border_style = if focused {
        Style::default().fg(GOLD)
    } else {
        Style::default().fg(SUBDUED_BORDER)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" {} ", field.label()))
        .title_style(Style::default().fg(if focused { GOLD } else { MUTED_GRAY }));

    let mut spans = Vec::new();
    for (i, (label, selected)) in options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *selected {
            Style::default().fg(DONE_GREEN).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_GRAY)
        };
        let marker = if *selected { "●" } else { "○" };
        spans.push(Span::styled(format!("{marker} {label}"), style));
    }
    if focused {
        spans.push(Span::styled(
            "  ←/→ to change",
            Style::default().fg(MUTED_GRAY).add_modifier(Modifier::DIM),
        ));
    }

    let selector = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(selector, area);
}

/// Render a centered step heading with a one-line subtitle
pub(crate) fn render_heading(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    use ratatui::layout::{Alignment, Constraint, Direction, Layout};

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let title_widget = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title_widget, rows[0]);

    let subtitle_widget = Paragraph::new(Line::from(Span::styled(
        subtitle,
        Style::default().fg(MUTED_GRAY),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle_widget, rows[1]);
}
