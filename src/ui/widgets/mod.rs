//! Reusable UI widgets

mod commit_card;
mod error_banner;
mod help_panel;
mod status_bar;

pub use commit_card::{
    build_card_lines, build_compact_card_lines, format_updated_at, render_commit_card,
};
pub use error_banner::render_error_banner;
pub use help_panel::{build_help_lines, render_help_panel};
pub use status_bar::{build_refresh_indicator, build_status_bar, render_status_bar};
