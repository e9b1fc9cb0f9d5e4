use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::hydration::use_cases::session::inbound::graphql::GqlSession;
use crate::modules::hydration::use_cases::sign_up::command::SignUp;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SignUpMutation;

#[Object]
impl SignUpMutation {
    async fn sign_up(
        &self,
        context: &Context<'_>,
        full_name: String,
        email: String,
        password: String,
        confirm_password: String,
    ) -> GqlResult<GqlSession> {
        let state = context.data_unchecked::<AppState>();
        let session = state
            .sign_up
            .handle(SignUp {
                full_name,
                email,
                password,
                confirm_password,
            })
            .await
            .map_err(|e| e.extend())?;
        Ok(session.into())
    }
}
