use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::hydration::use_cases::session::command::SignIn;
use crate::shared::infrastructure::auth::Session;
use crate::shell::graphql::current_user;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSession {
    pub access_token: String,
    pub user_id: String,
}

impl From<Session> for GqlSession {
    fn from(s: Session) -> Self {
        Self {
            access_token: s.access_token,
            user_id: s.user_id,
        }
    }
}

#[derive(Default)]
pub struct SessionMutation;

#[Object]
impl SessionMutation {
    async fn sign_in(
        &self,
        context: &Context<'_>,
        email: String,
        password: String,
    ) -> GqlResult<GqlSession> {
        let state = context.data_unchecked::<AppState>();
        let session = state
            .session
            .sign_in(SignIn { email, password })
            .await
            .map_err(|e| e.extend())?;
        Ok(session.into())
    }

    async fn sign_out(&self, context: &Context<'_>) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let user = current_user(context)?;
        state
            .session
            .sign_out(&user.access_token)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }
}
