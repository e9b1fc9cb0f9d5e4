// Reminder cadence: one slot every two hours across the active window.
//
// Purpose
// - Turn (goal, window, now) into concrete fire instants and a per-reminder serving count.
//
// Boundaries
// - Pure and stateless. The same inputs and the same `now` always give the same plan.
// - A slot whose local time is not after `now` rolls to the same hour tomorrow.

use crate::modules::hydration::core::errors::ValidationError;
use crate::shared::core::primitives::UNIT_SIZE_ML;
use chrono::{DateTime, Duration, FixedOffset, NaiveTime};

pub const REMINDER_TITLE: &str = "Water Reminder";
const SLOT_SPACING_HOURS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ReminderSlot {
    pub hour: u32,
    pub fire_at: DateTime<FixedOffset>,
    pub after_seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ReminderPlan {
    pub units_per_reminder: u64,
    pub slots: Vec<ReminderSlot>,
}

impl ReminderPlan {
    pub fn message(&self) -> String {
        format!(
            "Don't forget to drink water! You still have {} cups to go.",
            self.units_per_reminder
        )
    }
}

pub fn plan_reminders(
    daily_goal: u32,
    start_hour: u32,
    end_hour: u32,
    now: DateTime<FixedOffset>,
) -> Result<ReminderPlan, ValidationError> {
    if start_hour >= end_hour || end_hour > 24 {
        return Err(ValidationError::InvalidReminderWindow {
            start: start_hour,
            end: end_hour,
        });
    }
    if daily_goal == 0 {
        return Err(ValidationError::GoalNotPositive(0));
    }

    let window_hours = end_hour - start_hour;
    let slot_count = window_hours.div_ceil(SLOT_SPACING_HOURS);
    // goal / (unit * window / spacing), kept exact for odd windows
    let units_per_reminder = (u64::from(daily_goal) * u64::from(SLOT_SPACING_HOURS))
        .div_ceil(u64::from(UNIT_SIZE_ML) * u64::from(window_hours));

    let today = now.date_naive();
    let now_local = now.naive_local();
    let mut slots = Vec::with_capacity(slot_count as usize);
    for i in 0..slot_count {
        let hour = start_hour + SLOT_SPACING_HOURS * i;
        let time = NaiveTime::from_hms_opt(hour, 0, 0).ok_or(
            ValidationError::InvalidReminderWindow {
                start: start_hour,
                end: end_hour,
            },
        )?;
        let mut fire_at = now + (today.and_time(time) - now_local);
        if fire_at <= now {
            fire_at += Duration::days(1);
        }
        let millis = (fire_at - now).num_milliseconds();
        slots.push(ReminderSlot {
            hour,
            fire_at,
            after_seconds: (millis + 999) / 1000,
        });
    }

    Ok(ReminderPlan {
        units_per_reminder,
        slots,
    })
}
