//! Data models for the commit widget
//!
//! UI-independent values passed from the timeline provider to the renderer.

mod commit;
mod entry;
mod notification;
mod refresh;

pub use commit::{Commit, FAILED_MESSAGE, LOADING_MESSAGE};
pub use entry::{DEFAULT_RELEVANCE, Entry, MAX_RELEVANCE, Relevance, Timeline};
pub use notification::{Notification, NotificationKind};
pub use refresh::{REFRESH_INTERVAL_MINUTES, RefreshPolicy, default_refresh_interval};
