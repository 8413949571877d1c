//! Application state and view management

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::config::WidgetConfig;
use crate::github::CommitFetcher;
use crate::model::{Entry, Notification, RefreshPolicy, Timeline};
use crate::timeline::TimelineProvider;

/// Provider shared between the UI loop and spawned fetch tasks
pub type SharedProvider = Arc<TimelineProvider<Box<dyn CommitFetcher>>>;

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Widget,
    Help,
}

/// The main application state
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Branch being watched
    pub config: WidgetConfig,
    /// Entry currently on screen
    pub entry: Entry,
    /// Policy from the last completed refresh (None before the first one)
    pub policy: Option<RefreshPolicy>,
    /// Preview mode shows the snapshot entry and never fetches
    pub preview: bool,
    /// Notification to display in the status bar
    pub notification: Option<Notification>,
    pub(crate) provider: SharedProvider,
    /// A fetch task is outstanding
    pub(crate) in_flight: bool,
    pub(crate) timeline_tx: mpsc::UnboundedSender<Timeline>,
    pub(crate) timeline_rx: mpsc::UnboundedReceiver<Timeline>,
}

impl App {
    /// App showing the placeholder entry until the first refresh completes
    pub fn new(config: WidgetConfig, provider: SharedProvider, now: DateTime<Utc>) -> Self {
        let entry = provider.placeholder(now);
        Self::with_entry(config, provider, entry, false)
    }

    /// App showing the snapshot entry, with refreshing disabled
    pub fn preview(config: WidgetConfig, provider: SharedProvider, now: DateTime<Utc>) -> Self {
        let entry = provider.snapshot(now);
        Self::with_entry(config, provider, entry, true)
    }

    fn with_entry(
        config: WidgetConfig,
        provider: SharedProvider,
        entry: Entry,
        preview: bool,
    ) -> Self {
        let (timeline_tx, timeline_rx) = mpsc::unbounded_channel();
        Self {
            running: true,
            current_view: View::Widget,
            config,
            entry,
            policy: None,
            preview,
            notification: None,
            provider,
            in_flight: false,
            timeline_tx,
            timeline_rx,
        }
    }

    /// Is a fetch outstanding?
    pub fn is_refreshing(&self) -> bool {
        self.in_flight
    }

    /// Toggle between the widget and the help panel
    pub(crate) fn toggle_help(&mut self) {
        self.current_view = match self.current_view {
            View::Widget => View::Help,
            View::Help => View::Widget,
        };
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
