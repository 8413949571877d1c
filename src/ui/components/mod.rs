//! Reusable UI components
//!
//! Line builders shared by several widgets.

mod message;

pub use message::{build_error_line, build_notification_span};
