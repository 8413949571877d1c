//! Commit card widget
//!
//! Draws one [`Entry`]: repository title, commit message, byline and the
//! time the entry was observed.

use chrono::{DateTime, Local, TimeZone};
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::model::{Entry, LOADING_MESSAGE};
use crate::ui::theme::card;

/// Format an observation time as `MM-dd-yyyy HH:mm`
pub fn format_updated_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%m-%d-%Y %H:%M").to_string()
}

/// Build the text lines of the card
///
/// `updated_at` is passed in already formatted so callers pick the timezone.
pub fn build_card_lines(repo_slug: &str, entry: &Entry, updated_at: &str) -> Vec<Line<'static>> {
    let commit = &entry.commit;
    let color = message_color(entry);

    let mut lines = vec![
        Line::from(format!("{repo_slug}'s Latest Commit")).fg(card::TEXT),
        Line::from(""),
    ];
    lines.extend(
        commit
            .message
            .lines()
            .map(|l| Line::from(l.to_string()).bold().fg(color)),
    );

    let byline = commit.byline();
    if !byline.is_empty() {
        lines.push(Line::from(byline).fg(card::TEXT));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(format!("Updated at {updated_at}")).fg(card::FOOTER));
    lines
}

/// Build the card for areas too short for the full layout
///
/// Drops the title and blank rows and keeps only the first message line.
pub fn build_compact_card_lines(entry: &Entry, updated_at: &str) -> Vec<Line<'static>> {
    let commit = &entry.commit;
    let mut lines = vec![
        Line::from(commit.summary().to_string())
            .bold()
            .fg(message_color(entry)),
    ];

    let byline = commit.byline();
    if !byline.is_empty() {
        lines.push(Line::from(byline).fg(card::TEXT));
    }
    lines.push(Line::from(format!("Updated at {updated_at}")).fg(card::FOOTER));
    lines
}

fn message_color(entry: &Entry) -> Color {
    if entry.is_failure() {
        card::FAILURE
    } else if entry.commit.message == LOADING_MESSAGE && entry.commit.is_sentinel() {
        card::LOADING
    } else {
        card::TEXT
    }
}

/// Render the card for `entry` into `area`
///
/// Falls back to the compact layout when the full card does not fit.
pub fn render_commit_card(frame: &mut Frame, area: Rect, repo_slug: &str, entry: &Entry) {
    let updated_at = format_updated_at(&entry.observed_at.with_timezone(&Local));
    let mut lines = build_card_lines(repo_slug, entry, &updated_at);
    let inner_height = usize::from(area.height.saturating_sub(2));
    if lines.len() > inner_height {
        lines = build_compact_card_lines(entry, &updated_at);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(" Latest Commit ").bold())
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(card::BACKGROUND).fg(card::TEXT));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
