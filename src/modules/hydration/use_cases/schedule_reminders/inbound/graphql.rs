use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::hydration::core::reminders::ReminderPlan;
use crate::modules::hydration::use_cases::schedule_reminders::command::ScheduleReminders;
use crate::shell::graphql::current_user;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlReminderSlot {
    pub hour: u32,
    /// RFC 3339, in the requested offset.
    pub fire_at: String,
    pub after_seconds: i64,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlReminderPlan {
    pub units_per_reminder: u64,
    pub message: String,
    pub slots: Vec<GqlReminderSlot>,
}

impl From<ReminderPlan> for GqlReminderPlan {
    fn from(plan: ReminderPlan) -> Self {
        Self {
            message: plan.message(),
            units_per_reminder: plan.units_per_reminder,
            slots: plan
                .slots
                .into_iter()
                .map(|s| GqlReminderSlot {
                    hour: s.hour,
                    fire_at: s.fire_at.to_rfc3339(),
                    after_seconds: s.after_seconds,
                })
                .collect(),
        }
    }
}

#[derive(Default)]
pub struct ScheduleRemindersMutation;

#[Object]
impl ScheduleRemindersMutation {
    async fn schedule_reminders(
        &self,
        context: &Context<'_>,
        start_hour: Option<u32>,
        end_hour: Option<u32>,
        utc_offset_minutes: Option<i32>,
    ) -> GqlResult<GqlReminderPlan> {
        let state = context.data_unchecked::<AppState>();
        let user = current_user(context)?;

        let plan = state
            .schedule_reminders
            .handle(ScheduleReminders {
                user_id: user.user_id.clone(),
                start_hour,
                end_hour,
                utc_offset_minutes,
                now: Utc::now(),
            })
            .await
            .map_err(|e| e.extend())?;
        Ok(plan.into())
    }
}
