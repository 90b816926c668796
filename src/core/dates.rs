// src/core/dates.rs

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};

use crate::config::consts::PACIFIC_UTC_OFFSET_HOURS;
use crate::error::{Result, StatError};

/// Inclusive date window a run collects stats for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Number of calendar days covered, inclusive.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Window of `days` days counting back from, and including, `today`.
pub fn window_from_days(days: i64, today: NaiveDate) -> Result<DateWindow> {
    if days <= 0 {
        return Err(StatError::InvalidRange(
            "days must be a positive integer".into(),
        ));
    }
    Ok(DateWindow {
        start: today - Duration::days(days - 1),
        end: today,
    })
}

/// Window from explicit inclusive bounds.
pub fn window_from_bounds(start: NaiveDate, end: NaiveDate) -> Result<DateWindow> {
    if start > end {
        return Err(StatError::InvalidRange(
            "start date cannot be greater than end date".into(),
        ));
    }
    Ok(DateWindow { start, end })
}

/// Parse a `YYYY-MM-DD` CLI argument.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| StatError::InvalidRange(format!("dates must be of format YYYY-MM-DD: {s}")))
}

/// Calendar day a game belongs to, US/Pacific. Late-evening games land on the
/// previous local day relative to their UTC timestamp.
pub fn game_local_date(ts: DateTime<Utc>) -> NaiveDate {
    match FixedOffset::east_opt(PACIFIC_UTC_OFFSET_HOURS * 3600) {
        Some(offset) => ts.with_timezone(&offset).date_naive(),
        None => ts.date_naive(),
    }
}
