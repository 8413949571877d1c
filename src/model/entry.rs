//! Timeline entry model

use chrono::{DateTime, Utc};

use super::{Commit, RefreshPolicy};
use crate::github::FetchError;

/// Relevance score range is 0 (not important) to 100 (very important)
pub const MAX_RELEVANCE: u8 = 100;

/// Score attached to every entry this widget produces
pub const DEFAULT_RELEVANCE: u8 = 10;

/// How strongly an entry asks to be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relevance(u8);

impl Relevance {
    /// Create a relevance score, clamped to `0..=100`
    pub fn new(score: u8) -> Self {
        Self(score.min(MAX_RELEVANCE))
    }

    /// The raw score
    pub fn score(&self) -> u8 {
        self.0
    }
}

impl Default for Relevance {
    fn default() -> Self {
        Self::new(DEFAULT_RELEVANCE)
    }
}

/// One displayable snapshot for a single refresh cycle
#[derive(Debug, Clone)]
pub struct Entry {
    /// When this entry was produced
    pub observed_at: DateTime<Utc>,
    /// Always populated; failures use [`Commit::failed`]
    pub commit: Commit,
    pub relevance: Relevance,
    /// The fetch error behind a failure sentinel, if any
    pub failure: Option<FetchError>,
}

impl Entry {
    /// Entry for a commit observed at `observed_at`
    pub fn new(observed_at: DateTime<Utc>, commit: Commit) -> Self {
        Self {
            observed_at,
            commit,
            relevance: Relevance::default(),
            failure: None,
        }
    }

    /// Failure sentinel entry carrying the error that caused it
    pub fn failed(observed_at: DateTime<Utc>, error: FetchError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new(observed_at, Commit::failed())
        }
    }

    /// Did this entry come from a failed fetch?
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

/// Entries plus the policy for the next refresh
///
/// This widget only ever produces single-entry timelines.
#[derive(Debug, Clone)]
pub struct Timeline {
    pub entries: Vec<Entry>,
    pub policy: RefreshPolicy,
}

impl Timeline {
    /// Timeline holding exactly one entry
    pub fn single(entry: Entry, policy: RefreshPolicy) -> Self {
        Self {
            entries: vec![entry],
            policy,
        }
    }

    /// Consume the timeline, returning its latest entry and policy
    pub fn into_latest(mut self) -> Option<(Entry, RefreshPolicy)> {
        self.entries.pop().map(|entry| (entry, self.policy))
    }
}
