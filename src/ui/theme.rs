//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the commit card
pub mod card {
    use super::*;

    /// Card background
    pub const BACKGROUND: Color = Color::Rgb(255, 176, 59);
    /// Default text color
    pub const TEXT: Color = Color::Black;
    /// "Updated at" footer
    pub const FOOTER: Color = Color::Rgb(90, 60, 20);
    /// Message color when the entry is a failure sentinel
    pub const FAILURE: Color = Color::Red;
    /// Message color while loading
    pub const LOADING: Color = Color::DarkGray;
}

/// Colors for the status bar
pub mod status_bar {
    use super::*;

    /// Countdown to the next refresh
    pub const COUNTDOWN: Color = Color::DarkGray;
    /// Shown while a fetch is in flight
    pub const IN_FLIGHT: Color = Color::Yellow;
}
