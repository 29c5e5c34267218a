// ABOUTME: First wizard step: claim a storefront username

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{render_heading, render_text_field, MUTED_GRAY};
use crate::app::{AppState, StepField};
use crate::config::AppConfig;

pub struct StepUsername;

impl StepUsername {
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState, config: &AppConfig) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(1),
                Constraint::Length(3), // Username input
                Constraint::Length(2), // Hint
                Constraint::Min(0),
            ])
            .split(area);

        render_heading(
            frame,
            layout[0],
            "Claim your link",
            "Choose a unique username for your Fabrica store",
        );

        render_text_field(
            frame,
            layout[2],
            state,
            StepField::Username,
            Some(&config.ui_preferences.storefront_url_prefix),
        );

        let hint = Paragraph::new(Line::from(Span::styled(
            "Lowercase letters, numbers, - and _ only",
            Style::default().fg(MUTED_GRAY).add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, layout[3]);
    }
}
