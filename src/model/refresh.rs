//! Refresh policy handed back to the scheduler

use chrono::{DateTime, Duration, Utc};

/// Default delay between refresh cycles
pub const REFRESH_INTERVAL_MINUTES: i64 = 5;

/// Default delay between refresh cycles as a [`Duration`]
pub fn default_refresh_interval() -> Duration {
    Duration::minutes(REFRESH_INTERVAL_MINUTES)
}

/// When the scheduler may run the next refresh
///
/// `After(t)` is a floor, not an exact schedule: the scheduler may run
/// the refresh any time at or after `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Refresh again no earlier than the given instant
    After(DateTime<Utc>),
}

impl RefreshPolicy {
    /// Policy for "refresh `interval` after `now`"
    ///
    /// Saturates at the latest representable instant instead of overflowing.
    pub fn after_delay(now: DateTime<Utc>, interval: Duration) -> Self {
        Self::After(
            now.checked_add_signed(interval)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        )
    }

    /// Earliest instant the next refresh may run
    pub fn not_before(&self) -> DateTime<Utc> {
        match self {
            Self::After(t) => *t,
        }
    }

    /// Check whether a refresh may run at `now`
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now >= self.not_before()
    }

    /// Time left until the refresh becomes due (zero once due)
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.not_before() - now).max(Duration::zero())
    }
}
