//! Error and notification message components
//!
//! Provides consistent styling for error messages and notifications.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build an error message line for banner display
///
/// Format: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Build a colored span for a notification
pub fn build_notification_span(notification: &Notification) -> Span<'static> {
    let color = match notification.kind {
        NotificationKind::Info => Color::Cyan,
        NotificationKind::Warning => Color::Yellow,
    };
    Span::styled(
        format!(" {} ", notification.message),
        Style::default().fg(color),
    )
}
