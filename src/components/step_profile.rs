// ABOUTME: Second wizard step: merchant profile details

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::{render_heading, render_text_field};
use crate::app::{AppState, StepField};

pub struct StepProfile;

impl StepProfile {
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(1),
                Constraint::Length(3), // Full name
                Constraint::Length(3), // Bio
                Constraint::Length(3), // Avatar URL
                Constraint::Min(0),
            ])
            .split(area);

        render_heading(
            frame,
            layout[0],
            "Set up your profile",
            "This is what customers see on your storefront",
        );

        render_text_field(frame, layout[2], state, StepField::FullName, None);
        render_text_field(frame, layout[3], state, StepField::Bio, None);
        render_text_field(frame, layout[4], state, StepField::AvatarUrl, None);
    }
}
