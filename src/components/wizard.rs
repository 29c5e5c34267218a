// ABOUTME: Wizard chrome: progress header, step content dispatch, nav footer
// Renders the step-based wizard following the Fabrica TUI style

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::{
    StepPayment, StepPreview, StepProduct, StepProfile, StepUsername, ACCENT, DARK_BG, DONE_GREEN,
    GOLD, MUTED_GRAY, PANEL_BG, SOFT_WHITE, SUBDUED_BORDER,
};
use crate::app::AppState;
use crate::config::AppConfig;
use crate::onboarding::OnboardingStep;

/// The main wizard component
pub struct WizardComponent {
    username: StepUsername,
    profile: StepProfile,
    payment: StepPayment,
    product: StepProduct,
    preview: StepPreview,
}

impl Default for WizardComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardComponent {
    pub fn new() -> Self {
        Self {
            username: StepUsername,
            profile: StepProfile,
            payment: StepPayment,
            product: StepProduct,
            preview: StepPreview,
        }
    }

    /// Main render function
    pub fn render(&self, frame: &mut Frame, state: &AppState, config: &AppConfig) {
        let area = frame.size();

        let container = Block::default().style(Style::default().bg(DARK_BG));
        frame.render_widget(container, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),  // Header with progress
                Constraint::Min(12),    // Step content
                Constraint::Length(3),  // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], state, config);
        self.render_step_content(frame, layout[1], state, config);
        self.render_footer(frame, layout[2], state);

        if state.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState, config: &AppConfig) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![Span::styled(
            "Fabrica Setup",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        self.render_progress(frame, header_layout[1], state, config);
    }

    /// Render step progress dots: done, current, upcoming
    fn render_progress(&self, frame: &mut Frame, area: Rect, state: &AppState, config: &AppConfig) {
        let steps = OnboardingStep::all();
        let current_idx = state.current_step().number() - 1;

        let mut spans = vec![Span::raw("  ")];

        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(DONE_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));

            let label = if config.ui_preferences.show_step_descriptions && idx == current_idx {
                format!("{} — {}", step.title(), step.description())
            } else {
                step.title().to_string()
            };
            spans.push(Span::styled(
                label,
                if idx == current_idx {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        let progress = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(progress, area);
    }

    fn render_step_content(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        config: &AppConfig,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(
                " Step {} of {} ",
                state.current_step().number(),
                OnboardingStep::total()
            ))
            .title_style(Style::default().fg(MUTED_GRAY));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        match state.current_step() {
            OnboardingStep::Username => self.username.render(frame, inner, state, config),
            OnboardingStep::Profile => self.profile.render(frame, inner, state),
            OnboardingStep::Payment => self.payment.render(frame, inner, state),
            OnboardingStep::Product => self.product.render(frame, inner, state),
            OnboardingStep::Preview => self.preview.render(frame, inner, state, config),
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let back_hint = if state.store.flow().can_go_back() {
            "Esc back"
        } else {
            "Esc quit"
        };
        let enter_hint = if state.current_step() == OnboardingStep::Preview {
            "Enter launch"
        } else {
            "Enter continue"
        };

        let hints = format!(
            "  {enter_hint}  ·  {back_hint}  ·  Tab next field  ·  Ctrl+R start over  ·  F1 help"
        );

        let footer = Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(MUTED_GRAY),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(SUBDUED_BORDER)),
        );
        frame.render_widget(footer, area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.min(52);
        let height = area.height.min(12);
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, popup);

        let lines = vec![
            Line::from(""),
            Line::from("  Enter       continue / launch"),
            Line::from("  Esc         back / quit"),
            Line::from("  Tab, ↓      next field"),
            Line::from("  Shift+Tab, ↑  previous field"),
            Line::from("  ←/→, Space  change a selection"),
            Line::from("  Ctrl+R      start over"),
            Line::from("  Ctrl+C      quit"),
            Line::from(""),
            Line::from(Span::styled(
                "  Progress is saved as you type.",
                Style::default().fg(MUTED_GRAY),
            )),
        ];

        let help = Paragraph::new(lines)
            .style(Style::default().fg(SOFT_WHITE).bg(PANEL_BG))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(GOLD))
                    .title(" Keys ")
                    .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            );
        frame.render_widget(help, popup);
    }
}
