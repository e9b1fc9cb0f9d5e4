use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::hydration::use_cases::set_goal::command::SetGoal;
use crate::shell::graphql::current_user;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SetGoalMutation;

#[Object]
impl SetGoalMutation {
    /// Returns the stored goal in ml.
    async fn set_goal(&self, context: &Context<'_>, daily_goal: String) -> GqlResult<u32> {
        let state = context.data_unchecked::<AppState>();
        let user = current_user(context)?;

        state
            .set_goal
            .handle(SetGoal {
                user_id: user.user_id.clone(),
                daily_goal,
            })
            .await
            .map_err(|e| e.extend())
    }
}
