//! Status bar widget
//!
//! Key hints on the left, refresh countdown (or in-flight marker) after them.

use chrono::Duration;
use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;
use crate::model::Notification;
use crate::ui::components::build_notification_span;
use crate::ui::theme;

/// Text describing when the next refresh happens
pub fn build_refresh_indicator(remaining: Option<Duration>, in_flight: bool) -> String {
    if in_flight {
        return "Refreshing…".to_string();
    }
    match remaining {
        Some(d) if d > Duration::zero() => {
            let secs = d.num_seconds();
            format!("Next refresh in {}m {:02}s", secs / 60, secs % 60)
        }
        Some(_) => "Refresh due".to_string(),
        None => "Waiting for first refresh".to_string(),
    }
}

/// Build a status bar line from key hints and the refresh indicator
pub fn build_status_bar(
    hints: &[KeyHint],
    indicator: &str,
    in_flight: bool,
    notification: Option<&Notification>,
) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    let indicator_color = if in_flight {
        theme::status_bar::IN_FLIGHT
    } else {
        theme::status_bar::COUNTDOWN
    };
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        indicator.to_string(),
        Style::default().fg(indicator_color),
    ));

    if let Some(n) = notification {
        spans.push(Span::raw(" |"));
        spans.push(build_notification_span(n));
    }

    Line::from(spans)
}

/// Render the status bar on the last row of the screen
pub fn render_status_bar(frame: &mut Frame, line: Line<'static>) {
    let area = frame.area();
    if area.height < 2 {
        return;
    }

    let status_area = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(line), status_area);
}
