//! Help panel widget

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys;

/// Build the lines shown in the help panel
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    for entry in keys::WIDGET_KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:10}", entry.key), Style::default().fg(Color::Yellow)),
            Span::raw(entry.description),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from("The commit is refreshed automatically every few minutes.").dark_gray(),
    );
    lines
}

/// Render the help panel into `area`
pub fn render_help_panel(frame: &mut Frame, area: Rect) {
    let title = Line::from(" Commit Widget - Help ").bold().white().centered();
    frame.render_widget(
        Paragraph::new(build_help_lines())
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}
