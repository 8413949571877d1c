//! Application module
//!
//! The terminal host around the timeline provider, split into:
//! - `state`: App struct and view management
//! - `refresh`: refresh scheduling and fetch task plumbing
//! - `input`: Key event handling
//! - `render`: UI rendering

mod input;
mod refresh;
mod render;
mod state;

pub use state::{App, SharedProvider, View};
