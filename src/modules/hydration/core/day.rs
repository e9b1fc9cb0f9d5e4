// Local calendar day and its instant window.
//
// A day runs from local wall-clock midnight to the next local midnight, in the
// caller's UTC offset. Two users in different offsets partition the same instant
// into different days.

use crate::modules::hydration::core::errors::ValidationError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDay {
    pub date: NaiveDate,
    pub offset: FixedOffset,
}

impl LocalDay {
    pub fn new(date: NaiveDate, offset: FixedOffset) -> Self {
        Self { date, offset }
    }

    /// The day `now` falls on, in `now`'s own offset.
    pub fn of(now: DateTime<FixedOffset>) -> Self {
        Self {
            date: now.date_naive(),
            offset: *now.offset(),
        }
    }

    pub fn containing(instant: i64, offset: FixedOffset) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(instant).map(|utc| Self::of(utc.with_timezone(&offset)))
    }

    /// `[start, end)` in epoch milliseconds.
    pub fn window(&self) -> (i64, i64) {
        let midnight_as_utc = self.date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
        let start = midnight_as_utc - i64::from(self.offset.local_minus_utc()) * 1000;
        (start, start + DAY_MS)
    }

    pub fn contains(&self, instant: i64) -> bool {
        let (start, end) = self.window();
        instant >= start && instant < end
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.offset.local_minus_utc() / 60
    }
}

pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, ValidationError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(ValidationError::InvalidUtcOffset(minutes))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}
