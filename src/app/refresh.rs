//! Refresh scheduling
//!
//! The app plays the host scheduler: it runs a refresh once the current
//! policy is due, keeps at most one fetch in flight, and applies results as
//! they arrive on the timeline channel.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::model::{Notification, Timeline};

use super::state::App;

impl App {
    /// Idle tick: start a refresh if one is due and apply finished ones
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_tick(&mut self, now: DateTime<Utc>) {
        self.poll_refresh();
        self.clear_expired_notification();

        if self.refresh_due(now) {
            self.start_refresh(now);
        }
    }

    /// Should a refresh start at `now`?
    ///
    /// True before the first refresh and whenever the policy floor has passed,
    /// however late the tick arrives.
    pub fn refresh_due(&self, now: DateTime<Utc>) -> bool {
        if self.preview || self.in_flight {
            return false;
        }
        self.policy.is_none_or(|policy| policy.is_due(now))
    }

    /// Manual refresh (r / Ctrl+L)
    pub(crate) fn request_refresh(&mut self, now: DateTime<Utc>) {
        if self.preview {
            self.notification = Some(Notification::warning("Preview mode: refresh disabled"));
        } else if self.in_flight {
            self.notification = Some(Notification::warning("Refresh already in progress"));
        } else {
            self.start_refresh(now);
            self.notification = Some(Notification::info("Refreshing"));
        }
    }

    /// Spawn one fetch task; no-op while another is outstanding
    pub(crate) fn start_refresh(&mut self, now: DateTime<Utc>) {
        if self.in_flight {
            return;
        }
        self.in_flight = true;
        debug!(%now, "starting refresh");

        let provider = Arc::clone(&self.provider);
        let tx = self.timeline_tx.clone();
        tokio::spawn(async move {
            let timeline = provider.timeline(now).await;
            // Receiver is gone once the app quits
            let _ = tx.send(timeline);
        });
    }

    /// Apply any finished refresh without blocking
    pub fn poll_refresh(&mut self) {
        while let Ok(timeline) = self.timeline_rx.try_recv() {
            self.apply_timeline(timeline);
        }
    }

    fn apply_timeline(&mut self, timeline: Timeline) {
        self.in_flight = false;
        if let Some((entry, policy)) = timeline.into_latest() {
            debug!(next = %policy.not_before(), failed = entry.is_failure(), "refresh complete");
            self.entry = entry;
            self.policy = Some(policy);
        }
    }
}
