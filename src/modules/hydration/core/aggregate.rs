// Derived daily view: the day's events, their sum, and the goal at query time.
//
// Boundaries
// - Never persisted and never cached; always folded from freshly fetched events.
// - The goal is not snapshotted, so re-querying a past day uses today's goal.

use crate::modules::hydration::core::day::LocalDay;
use crate::modules::hydration::core::intake::IntakeEvent;
use crate::modules::hydration::core::progress::Progress;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub utc_offset_minutes: i32,
    /// Newest first.
    pub events: Vec<IntakeEvent>,
    pub total: u64,
    pub goal: u32,
}

impl DailyAggregate {
    /// Keeps only events inside the day, orders them newest first and sums them.
    pub fn fold(day: LocalDay, goal: u32, events: impl IntoIterator<Item = IntakeEvent>) -> Self {
        let mut events: Vec<IntakeEvent> = events
            .into_iter()
            .filter(|e| day.contains(e.consumed_at))
            .collect();
        events.sort_by(|a, b| {
            b.consumed_at
                .cmp(&a.consumed_at)
                .then_with(|| b.intake_id.cmp(&a.intake_id))
        });
        let total: u64 = events.iter().map(|e| u64::from(e.amount)).sum();

        Self {
            date: day.date,
            utc_offset_minutes: day.utc_offset_minutes(),
            events,
            total,
            goal,
        }
    }

    pub fn progress(&self) -> Progress {
        Progress::compute(self.total, self.goal)
    }
}
