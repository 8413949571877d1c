//! Rendering tests for the commit card

use chrono::{TimeZone, Utc};
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use commit_widget::github::FetchError;
use commit_widget::ui::widgets::{build_card_lines, format_updated_at, render_commit_card};
use commit_widget::{Commit, Entry};

use super::buffer;

fn entry() -> Entry {
    Entry::new(
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 0).unwrap(),
        Commit::new("Fix bug", "alice", "2024-01-01T00:00:00Z"),
    )
}

#[test]
fn test_card_shows_commit_fields() {
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal
        .draw(|frame| render_commit_card(frame, frame.area(), "octo/hello", &entry()))
        .unwrap();

    let backend = terminal.backend();
    assert!(buffer::contains(backend, "octo/hello's Latest Commit"));
    assert!(buffer::contains(backend, "Fix bug"));
    assert!(buffer::contains(backend, "by alice at 2024-01-01T00:00:00Z"));
    assert!(buffer::contains(backend, "Updated at "));
}

#[test]
fn test_card_failure_entry() {
    let failed = Entry::failed(Utc::now(), FetchError::Transport("offline".to_string()));
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal
        .draw(|frame| render_commit_card(frame, frame.area(), "octo/hello", &failed))
        .unwrap();

    let backend = terminal.backend();
    assert!(buffer::contains(backend, "Failed to load commits"));
    assert!(!buffer::contains(backend, "by "));
}

#[test]
fn test_card_narrow_terminal_does_not_panic() {
    let mut terminal = Terminal::new(TestBackend::new(12, 4)).unwrap();
    terminal
        .draw(|frame| render_commit_card(frame, frame.area(), "octo/hello", &entry()))
        .unwrap();
}

#[test]
fn test_card_text() {
    let lines = build_card_lines("octo/hello", &entry(), &format_updated_at(&entry().observed_at));
    let text = lines
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    assert_snapshot!(text, @r"
    octo/hello's Latest Commit

    Fix bug
    by alice at 2024-01-01T00:00:00Z

    Updated at 01-02-2024 03:04
    ");
}
