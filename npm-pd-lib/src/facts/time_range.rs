use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A count of events that happened between two instants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub count: u64,
}

impl TimeRange {
    /// Length of the window in whole days, truncated toward zero.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days()
    }
}
