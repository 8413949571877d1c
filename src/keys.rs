//! Keybinding definitions for the commit widget
//!
//! All keybindings are defined here so the help panel and status bar stay in sync.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Plain keys
// =============================================================================

/// Quit application (or close help)
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Close help / quit
pub const ESC: KeyCode = KeyCode::Esc;

/// Toggle help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Refresh now
pub const REFRESH: KeyCode = KeyCode::Char('r');

// =============================================================================
// Help panel entries
// =============================================================================

/// One row of the help panel
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

pub const WIDGET_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Close help / Quit",
    },
    KeyBindEntry {
        key: "?",
        description: "Toggle help",
    },
    KeyBindEntry {
        key: "r",
        description: "Refresh now",
    },
    KeyBindEntry {
        key: "Ctrl+L",
        description: "Refresh now",
    },
    KeyBindEntry {
        key: "Ctrl+C",
        description: "Quit",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_REFRESH: KeyHint = KeyHint {
    key: "r",
    label: "Refresh",
    color: Color::Green,
};
pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};

pub const WIDGET_HINTS: &[KeyHint] = &[HINT_QUIT, HINT_REFRESH, HINT_HELP];
