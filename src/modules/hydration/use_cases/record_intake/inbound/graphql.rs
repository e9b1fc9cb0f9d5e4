use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::hydration::core::intake::IntakeEvent;
use crate::modules::hydration::use_cases::record_intake::command::RecordIntake;
use crate::shell::graphql::current_user;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlIntake {
    pub intake_id: String,
    pub user_id: String,
    pub amount: u32,
    pub consumed_at: i64,
}

impl From<IntakeEvent> for GqlIntake {
    fn from(e: IntakeEvent) -> Self {
        Self {
            intake_id: e.intake_id,
            user_id: e.user_id,
            amount: e.amount,
            consumed_at: e.consumed_at,
        }
    }
}

#[derive(Default)]
pub struct RecordIntakeMutation;

#[Object]
impl RecordIntakeMutation {
    /// `amount` is the raw text from the amount field, e.g. `"250"`.
    async fn record_intake(&self, context: &Context<'_>, amount: String) -> GqlResult<GqlIntake> {
        let state = context.data_unchecked::<AppState>();
        let user = current_user(context)?;

        let command = RecordIntake {
            user_id: user.user_id.clone(),
            amount,
            consumed_at: Utc::now().timestamp_millis(),
        };

        let event = state
            .record_intake
            .handle(command)
            .await
            .map_err(|e| e.extend())?;
        Ok(event.into())
    }
}
