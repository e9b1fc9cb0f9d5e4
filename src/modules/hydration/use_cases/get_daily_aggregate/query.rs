use crate::modules::hydration::core::day::{LocalDay, offset_from_minutes, parse_date};
use crate::modules::hydration::core::errors::ValidationError;
use chrono::{DateTime, FixedOffset, Utc};

/// Which day to aggregate. Both fields are optional and default to "today, in the configured offset".
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct DailyAggregateQuery {
    pub date: Option<String>,
    pub utc_offset_minutes: Option<i32>,
}

impl DailyAggregateQuery {
    pub fn resolve_day(
        &self,
        default_offset: FixedOffset,
        now: DateTime<Utc>,
    ) -> Result<LocalDay, ValidationError> {
        let offset = match self.utc_offset_minutes {
            Some(minutes) => offset_from_minutes(minutes)?,
            None => default_offset,
        };
        match self.date.as_deref() {
            Some(raw) => Ok(LocalDay::new(parse_date(raw)?, offset)),
            None => Ok(LocalDay::of(now.with_timezone(&offset))),
        }
    }
}
