//! Commit Widget - latest GitHub commit at a glance
//!
//! A small terminal widget that periodically fetches the latest commit on a
//! GitHub branch and shows its message, author and date.
//!
//! This library provides:
//! - [`github`]: Branch endpoint client and response parsing
//! - [`timeline`]: Turns fetch outcomes into displayable entries
//! - [`model`]: Domain models
//! - [`app`]: Terminal host (scheduling, input, rendering)
//! - [`ui`]: User interface components

pub mod app;
pub mod config;
pub mod github;
pub mod keys;
pub mod logging;
pub mod model;
pub mod timeline;
pub mod ui;

pub use config::WidgetConfig;
pub use github::{CommitFetcher, FetchError, GithubClient};
pub use model::{Commit, Entry, RefreshPolicy, Timeline};
pub use timeline::TimelineProvider;
