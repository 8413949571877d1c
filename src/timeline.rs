//! Timeline provider
//!
//! Turns one fetch into one displayable [`Entry`] plus the policy for the
//! next refresh. Fetch errors stop here: callers always get an entry.

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use crate::github::CommitFetcher;
use crate::model::{Commit, Entry, RefreshPolicy, Timeline, default_refresh_interval};

/// Produces entries for the widget host
#[derive(Debug)]
pub struct TimelineProvider<F> {
    fetcher: F,
    refresh_interval: Duration,
}

impl<F: CommitFetcher> TimelineProvider<F> {
    /// Provider with the default five minute refresh interval
    pub fn new(fetcher: F) -> Self {
        Self::with_refresh_interval(fetcher, default_refresh_interval())
    }

    pub fn with_refresh_interval(fetcher: F, refresh_interval: Duration) -> Self {
        Self {
            fetcher,
            refresh_interval,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Entry shown while no real data exists yet (no network access)
    pub fn placeholder(&self, now: DateTime<Utc>) -> Entry {
        Entry::new(now, Commit::loading())
    }

    /// Fixed example entry for previews (no network access)
    pub fn snapshot(&self, now: DateTime<Utc>) -> Entry {
        Entry::new(now, Commit::sample())
    }

    /// Fetch once and build a single-entry timeline stamped `now`
    pub async fn timeline(&self, now: DateTime<Utc>) -> Timeline {
        let entry = match self.fetcher.fetch().await {
            Ok(commit) => {
                info!(author = %commit.author, date = %commit.date, "loaded latest commit");
                Entry::new(now, commit)
            }
            Err(e) => {
                warn!(error = %e, kind = ?e.kind(), "failed to load latest commit");
                Entry::failed(now, e)
            }
        };
        let policy = RefreshPolicy::after_delay(now, self.refresh_interval);
        Timeline::single(entry, policy)
    }
}
