// Client context shared by every inbound adapter.
//
// Built once at start-up from concrete collaborators and dropped at shutdown.

use crate::modules::hydration::use_cases::delete_intake::handler::DeleteIntakeHandler;
use crate::modules::hydration::use_cases::get_daily_aggregate::handler::DailyAggregateHandler;
use crate::modules::hydration::use_cases::get_profile::handler::GetProfileHandler;
use crate::modules::hydration::use_cases::record_intake::handler::RecordIntakeHandler;
use crate::modules::hydration::use_cases::schedule_reminders::handler::{
    ReminderDefaults, ScheduleRemindersHandler,
};
use crate::modules::hydration::use_cases::session::handler::SessionHandler;
use crate::modules::hydration::use_cases::set_goal::handler::SetGoalHandler;
use crate::modules::hydration::use_cases::sign_up::handler::SignUpHandler;
use crate::shared::infrastructure::auth::in_memory::InMemoryAuth;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shared::infrastructure::records::in_memory::InMemoryRecords;
use crate::shell::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub record_intake: Arc<RecordIntakeHandler<InMemoryRecords>>,
    pub delete_intake: Arc<DeleteIntakeHandler<InMemoryRecords>>,
    pub daily_aggregate: Arc<DailyAggregateHandler<InMemoryRecords, InMemoryRecords>>,
    pub set_goal: Arc<SetGoalHandler<InMemoryRecords>>,
    pub schedule_reminders: Arc<ScheduleRemindersHandler<InMemoryRecords, InMemoryNotifier>>,
    pub sign_up: Arc<SignUpHandler<InMemoryAuth, InMemoryRecords>>,
    pub session: Arc<SessionHandler<InMemoryAuth>>,
    pub get_profile: Arc<GetProfileHandler<InMemoryRecords>>,
}

impl AppState {
    pub fn new(
        records: Arc<InMemoryRecords>,
        notifier: Arc<InMemoryNotifier>,
        auth: Arc<InMemoryAuth>,
        config: &Config,
    ) -> Self {
        let defaults = ReminderDefaults {
            start_hour: config.reminder_start_hour,
            end_hour: config.reminder_end_hour,
            offset: config.default_offset,
        };

        Self {
            record_intake: Arc::new(RecordIntakeHandler::new(records.clone())),
            delete_intake: Arc::new(DeleteIntakeHandler::new(records.clone())),
            daily_aggregate: Arc::new(DailyAggregateHandler::new(
                records.clone(),
                records.clone(),
                config.default_offset,
            )),
            set_goal: Arc::new(SetGoalHandler::new(records.clone())),
            schedule_reminders: Arc::new(ScheduleRemindersHandler::new(
                records.clone(),
                notifier,
                defaults,
            )),
            sign_up: Arc::new(SignUpHandler::new(auth.clone(), records.clone())),
            session: Arc::new(SessionHandler::new(auth)),
            get_profile: Arc::new(GetProfileHandler::new(records)),
        }
    }
}
