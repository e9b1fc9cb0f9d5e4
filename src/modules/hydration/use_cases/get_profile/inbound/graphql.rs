use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::hydration::core::profile::Profile;
use crate::shell::graphql::current_user;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProfile {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub daily_goal: u32,
}

impl From<Profile> for GqlProfile {
    fn from(p: Profile) -> Self {
        Self {
            user_id: p.user_id,
            full_name: p.full_name,
            email: p.email,
            daily_goal: p.daily_goal,
        }
    }
}

#[derive(Default)]
pub struct ProfileQueryRoot;

#[Object]
impl ProfileQueryRoot {
    async fn profile(&self, context: &Context<'_>) -> GqlResult<GqlProfile> {
        let state = context.data_unchecked::<AppState>();
        let user = current_user(context)?;
        let profile = state
            .get_profile
            .get(&user.user_id)
            .await
            .map_err(|e| e.extend())?;
        Ok(profile.into())
    }
}
