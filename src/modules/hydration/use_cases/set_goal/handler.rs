use crate::modules::hydration::core::errors::LedgerError;
use crate::modules::hydration::use_cases::set_goal::command::SetGoal;
use crate::modules::hydration::use_cases::set_goal::decide::decide_set_goal;
use crate::shared::infrastructure::records::ProfileStore;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub struct SetGoalHandler<TProfiles>
where
    TProfiles: ProfileStore + Send + Sync + 'static,
{
    profiles: Arc<TProfiles>,
}

impl<TProfiles> SetGoalHandler<TProfiles>
where
    TProfiles: ProfileStore + Send + Sync + 'static,
{
    pub fn new(profiles: Arc<TProfiles>) -> Self {
        Self { profiles }
    }

    /// Last write wins. Past days are re-read against the new goal.
    #[instrument(skip(self, command), fields(user_id = %command.user_id))]
    pub async fn handle(&self, command: SetGoal) -> Result<u32, LedgerError> {
        let daily_goal = decide_set_goal(&command).map_err(|reason| {
            warn!(%reason, "goal rejected");
            LedgerError::Validation(reason)
        })?;

        self.profiles
            .update_daily_goal(&command.user_id, daily_goal)
            .await
            .map_err(|e| {
                error!(error = %e, "failed to update goal");
                LedgerError::from(e)
            })?;

        info!(daily_goal, "goal updated");
        Ok(daily_goal)
    }
}
