use chrono::{DateTime, Utc};

/// Replace the user's reminders with a fresh cadence. Missing hours fall back to the configured window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleReminders {
    pub user_id: String,
    pub start_hour: Option<u32>,
    pub end_hour: Option<u32>,
    pub utc_offset_minutes: Option<i32>,
    pub now: DateTime<Utc>,
}
