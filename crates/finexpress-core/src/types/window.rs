//! Time-window selectors applied against a fine's issue date.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A reporting time window, evaluated against a reference "now".
///
/// `Today` is a calendar-day match in UTC; `LastNDays` is a rolling
/// interval anchored at the evaluation instant, not calendar-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "window", content = "days", rename_all = "snake_case")]
pub enum TimeWindow {
    /// No time restriction.
    AllTime,
    /// Timestamps falling on the same UTC calendar day as the reference.
    Today,
    /// Timestamps within the last `n` days of the reference instant.
    LastNDays(u32),
}

impl TimeWindow {
    /// Whether `timestamp` falls inside this window relative to `now`.
    pub fn contains(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            Self::AllTime => true,
            Self::Today => timestamp.date_naive() == now.date_naive(),
            // Checked subtraction: a cutoff past the representable range
            // means the window covers all of time.
            Self::LastNDays(n) => now
                .checked_sub_signed(Duration::days(i64::from(*n)))
                .is_none_or(|cutoff| timestamp >= cutoff),
        }
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::AllTime
    }
}
