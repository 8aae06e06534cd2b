use std::fmt;

use chrono::{DateTime, Duration, Utc};

/// A reporting window of "the last `days` days". Zero days means all time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Period {
    days: u32,
}

impl Period {
    pub const ALL_TIME: Period = Period { days: 0 };
    pub const DAY: Period = Period { days: 1 };
    pub const WEEK: Period = Period { days: 7 };
    pub const MONTH: Period = Period { days: 30 };

    pub fn last_days(days: u32) -> Self {
        Self { days }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn is_all_time(&self) -> bool {
        self.days == 0
    }

    /// Earliest included instant, or `None` when the period is unbounded.
    /// A window reaching past the earliest representable date is unbounded.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if self.is_all_time() {
            return None;
        }
        Duration::try_days(i64::from(self.days)).and_then(|span| now.checked_sub_signed(span))
    }

    /// The cutoff itself is inside the period.
    pub fn contains(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.cutoff(now) {
            Some(cutoff) => timestamp >= cutoff,
            None => true,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days {
            0 => f.write_str("all time"),
            1 => f.write_str("last 1 day"),
            n => write!(f, "last {n} days"),
        }
    }
}
