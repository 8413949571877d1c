//! Rendering tests for the whole app screen

use std::sync::Arc;

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use commit_widget::app::{App, SharedProvider};
use commit_widget::github::FetchError;
use commit_widget::{CommitFetcher, Entry, GithubClient, TimelineProvider, WidgetConfig};

use super::buffer;

fn app(preview: bool) -> App {
    let config = WidgetConfig::new("octo", "hello", "main").with_api_base("http://127.0.0.1:1");
    let fetcher: Box<dyn CommitFetcher> = Box::new(GithubClient::new(&config).unwrap());
    let provider: SharedProvider = Arc::new(TimelineProvider::new(fetcher));
    if preview {
        App::preview(config, provider, Utc::now())
    } else {
        App::new(config, provider, Utc::now())
    }
}

fn draw(app: &App) -> Terminal<TestBackend> {
    draw_sized(app, 80, 16)
}

fn draw_sized(app: &App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
}

#[test]
fn test_preview_screen() {
    let app = app(true);
    let terminal = draw(&app);
    let backend = terminal.backend();

    assert!(buffer::contains(backend, "- First Commit"));
    assert!(buffer::contains(backend, "by moon-john at 2020-12-10"));
    assert!(buffer::contains(backend, "[q] Quit"));
    assert!(buffer::contains(backend, "Preview"));
}

#[test]
fn test_placeholder_screen() {
    let app = app(false);
    let terminal = draw(&app);
    let backend = terminal.backend();

    assert!(buffer::contains(backend, "Loading..."));
    assert!(buffer::contains(backend, "Waiting for first refresh"));
}

#[test]
fn test_help_screen() {
    let mut app = app(true);
    app.on_key_event(
        KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
        Utc::now(),
    );
    let terminal = draw(&app);

    assert!(buffer::contains(terminal.backend(), "Key bindings:"));
    assert!(buffer::contains(terminal.backend(), "Refresh now"));
}

#[test]
fn test_error_banner_does_not_cover_card() {
    let mut app = app(false);
    app.entry = Entry::failed(Utc::now(), FetchError::Status { status: 503 });
    // Card gets exactly enough rows for the full layout once the banner row is reserved
    let terminal = draw_sized(&app, 80, 10);
    let rows = buffer::rows(terminal.backend());

    let updated_row = rows.iter().position(|r| r.contains("Updated at "));
    let error_row = rows.iter().position(|r| r.contains("GitHub returned HTTP 503"));

    assert!(updated_row.is_some(), "footer hidden: {rows:#?}");
    assert!(error_row.is_some(), "banner missing: {rows:#?}");
    assert!(updated_row < error_row);
    assert!(buffer::contains(terminal.backend(), "Failed to load commits"));
}

#[test]
fn test_short_terminal_uses_compact_card() {
    let mut app = app(true);
    app.entry.commit.message = "Subject line\n\nBody paragraph".to_string();
    let terminal = draw_sized(&app, 80, 6);
    let backend = terminal.backend();

    assert!(buffer::contains(backend, "Subject line"));
    assert!(!buffer::contains(backend, "Body paragraph"));
    assert!(buffer::contains(backend, "Updated at "));
}
