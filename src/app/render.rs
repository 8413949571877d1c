//! Rendering logic for the application

use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::state::{App, View};
use crate::keys;
use crate::ui::widgets::{
    build_refresh_indicator, build_status_bar, render_commit_card, render_error_banner,
    render_help_panel, render_status_bar,
};

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let failure = match self.current_view {
            View::Widget => self.entry.failure.as_ref(),
            View::Help => None,
        };
        let banner_height = u16::from(failure.is_some());
        let [main_area, banner_area, _status_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(banner_height),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        match self.current_view {
            View::Widget => {
                render_commit_card(frame, main_area, &self.config.repo_slug(), &self.entry);
                if let Some(error) = failure {
                    render_error_banner(frame, banner_area, &error.to_string());
                }
            }
            View::Help => render_help_panel(frame, main_area),
        }

        let remaining = self.policy.map(|p| p.remaining(Utc::now()));
        let indicator = if self.preview {
            "Preview".to_string()
        } else {
            build_refresh_indicator(remaining, self.in_flight)
        };
        let notification = self.notification.as_ref().filter(|n| !n.is_expired());
        let status = build_status_bar(keys::WIDGET_HINTS, &indicator, self.in_flight, notification);
        render_status_bar(frame, status);
    }
}
