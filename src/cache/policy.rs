// Cache staleness policy.
// Decides whether a snapshot timestamp is still young enough to serve.

use chrono::{DateTime, Days, Utc};

/// Snapshots are served for this many calendar days after being written.
pub const MAX_CACHE_AGE_DAYS: u64 = 7;

/// Calendar-day validity check, evaluated in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedCachePolicy;

impl FeedCachePolicy {
    /// True while `now` is strictly before `timestamp` plus the max age.
    /// Reports invalid when the deadline cannot be computed.
    pub fn validate(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match timestamp.checked_add_days(Days::new(MAX_CACHE_AGE_DAYS)) {
            Some(max_age) => now < max_age,
            None => false,
        }
    }
}
