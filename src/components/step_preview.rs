// ABOUTME: Final wizard step: summary of everything entered, then launch

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{render_heading, DONE_GREEN, GOLD, MUTED_GRAY, SOFT_WHITE, SUBDUED_BORDER};
use crate::app::AppState;
use crate::config::AppConfig;

pub struct StepPreview;

impl StepPreview {
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState, config: &AppConfig) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(1),
                Constraint::Min(8),    // Summary
                Constraint::Length(2), // Launch hint
            ])
            .split(area);

        render_heading(
            frame,
            layout[0],
            "Ready to launch",
            "Review your storefront before going live",
        );

        let flow = state.store.flow();
        let url = format!(
            "{}{}",
            config.ui_preferences.storefront_url_prefix, flow.user_data.username
        );

        let row = |label: &str, value: String| -> Line {
            let shown = if value.is_empty() {
                Span::styled("(not set)", Style::default().fg(MUTED_GRAY))
            } else {
                Span::styled(value, Style::default().fg(SOFT_WHITE))
            };
            Line::from(vec![
                Span::styled(format!("  {label:<14}"), Style::default().fg(MUTED_GRAY)),
                shown,
            ])
        };

        let provider = flow
            .payment_data
            .provider
            .map_or_else(String::new, |p| p.label().to_string());
        let price = if flow.product_data.price.is_empty() {
            String::new()
        } else {
            format!("{} ETB", flow.product_data.price)
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("  Storefront    ", Style::default().fg(MUTED_GRAY)),
                Span::styled(url, Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(""),
            row("Name", flow.user_data.full_name.clone()),
            row("Bio", flow.user_data.bio.clone()),
            Line::from(""),
            row("Payout via", provider),
            row("Account name", flow.payment_data.account_name.clone()),
            Line::from(""),
            row("Product", flow.product_data.title.clone()),
            row("Type", flow.product_data.kind.label().to_string()),
            row("Price", price),
        ];

        let summary = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER)),
        );
        frame.render_widget(summary, layout[2]);

        let hint = Paragraph::new(Line::from(Span::styled(
            "Press Enter to launch your store",
            Style::default().fg(DONE_GREEN).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, layout[3]);
    }
}
