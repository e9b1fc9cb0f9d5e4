use async_graphql::{Context, ErrorExtensions, ID, Object, Result as GqlResult};

use crate::modules::hydration::use_cases::delete_intake::command::DeleteIntake;
use crate::shell::graphql::current_user;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteIntakeMutation;

#[Object]
impl DeleteIntakeMutation {
    async fn delete_intake(&self, context: &Context<'_>, intake_id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let user = current_user(context)?;

        state
            .delete_intake
            .handle(DeleteIntake {
                user_id: user.user_id.clone(),
                intake_id: intake_id.0,
            })
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }
}
