//! Schedule-window arithmetic shared by the query and manager layers.

use chrono::{DateTime, Duration, Utc};

use crate::error::{Error, Result};

/// Normalize an optional start instant: absent means "now" (UTC).
pub fn normalize_start_date(start: Option<DateTime<Utc>>) -> DateTime<Utc> {
    start.unwrap_or_else(Utc::now)
}

/// Half-open lookahead window `[start, end)` over schedule start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ScheduleWindow {
    /// Window of `days` days beginning at `start` (now, when absent).
    ///
    /// Fails with `InvalidArgument` when the end of the window is not a
    /// representable instant.
    pub fn starting(start: Option<DateTime<Utc>>, days: i64) -> Result<Self> {
        let start = normalize_start_date(start);
        let end = start
            .checked_add_signed(Duration::days(days))
            .ok_or_else(|| Error::InvalidArgument(format!("invalid start date: {start}")))?;
        Ok(Self { start, end })
    }

    /// Whether `instant` falls inside the window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}
