// Reminder scheduling.
//
// Flow
// - Read the current goal, plan the cadence, then replace whatever was scheduled before.
// - Planning happens before the notifier is touched, so a bad window leaves old reminders in place.
// - A failed schedule cancels the slots already placed, so no partial cadence stays active.

use crate::modules::hydration::core::day::offset_from_minutes;
use crate::modules::hydration::core::errors::LedgerError;
use crate::modules::hydration::core::reminders::{REMINDER_TITLE, ReminderPlan, plan_reminders};
use crate::modules::hydration::use_cases::schedule_reminders::command::ScheduleReminders;
use crate::shared::core::primitives::DEFAULT_DAILY_GOAL_ML;
use crate::shared::infrastructure::notifier::{NotificationRequest, Notifier};
use crate::shared::infrastructure::records::ProfileStore;
use chrono::FixedOffset;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderDefaults {
    pub start_hour: u32,
    pub end_hour: u32,
    pub offset: FixedOffset,
}

pub struct ScheduleRemindersHandler<TProfiles, TNotifier>
where
    TProfiles: ProfileStore + Send + Sync + 'static,
    TNotifier: Notifier + Send + Sync + 'static,
{
    profiles: Arc<TProfiles>,
    notifier: Arc<TNotifier>,
    defaults: ReminderDefaults,
}

impl<TProfiles, TNotifier> ScheduleRemindersHandler<TProfiles, TNotifier>
where
    TProfiles: ProfileStore + Send + Sync + 'static,
    TNotifier: Notifier + Send + Sync + 'static,
{
    pub fn new(profiles: Arc<TProfiles>, notifier: Arc<TNotifier>, defaults: ReminderDefaults) -> Self {
        Self {
            profiles,
            notifier,
            defaults,
        }
    }

    #[instrument(skip(self, command), fields(user_id = %command.user_id))]
    pub async fn handle(&self, command: ScheduleReminders) -> Result<ReminderPlan, LedgerError> {
        let offset = match command.utc_offset_minutes {
            Some(minutes) => offset_from_minutes(minutes)?,
            None => self.defaults.offset,
        };
        let start_hour = command.start_hour.unwrap_or(self.defaults.start_hour);
        let end_hour = command.end_hour.unwrap_or(self.defaults.end_hour);

        let daily_goal = match self.profiles.find(&command.user_id).await? {
            Some(profile) => profile.daily_goal,
            None => {
                warn!("no profile found, planning against the default goal");
                DEFAULT_DAILY_GOAL_ML
            }
        };

        let plan = plan_reminders(
            daily_goal,
            start_hour,
            end_hour,
            command.now.with_timezone(&offset),
        )
        .map_err(|reason| {
            warn!(%reason, "reminder window rejected");
            LedgerError::Validation(reason)
        })?;

        self.notifier.cancel_all(&command.user_id).await.map_err(|e| {
            error!(error = %e, "failed to cancel previous reminders");
            LedgerError::from(e)
        })?;

        let body = plan.message();
        for slot in &plan.slots {
            let scheduled = self
                .notifier
                .schedule(
                    &command.user_id,
                    NotificationRequest {
                        title: REMINDER_TITLE.to_string(),
                        body: body.clone(),
                        after_seconds: slot.after_seconds,
                    },
                )
                .await;

            if let Err(e) = scheduled {
                error!(error = %e, hour = slot.hour, "failed to schedule reminder");
                if let Err(cleanup) = self.notifier.cancel_all(&command.user_id).await {
                    warn!(error = %cleanup, "failed to withdraw partially scheduled reminders");
                }
                return Err(e.into());
            }
        }

        info!(
            slots = plan.slots.len(),
            units_per_reminder = plan.units_per_reminder,
            "reminders scheduled"
        );
        Ok(plan)
    }
}
