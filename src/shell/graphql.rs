use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, MergedObject, Result as GqlResult, Schema,
    http::GraphiQLSource,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension,
    extract::State,
    http::HeaderMap,
    response::Html,
};
use tracing::debug;

use crate::modules::hydration::core::errors::LedgerError;
use crate::modules::hydration::use_cases::delete_intake::inbound::graphql::DeleteIntakeMutation;
use crate::modules::hydration::use_cases::get_daily_aggregate::inbound::graphql::DailyAggregateQueryRoot;
use crate::modules::hydration::use_cases::get_profile::inbound::graphql::ProfileQueryRoot;
use crate::modules::hydration::use_cases::record_intake::inbound::graphql::RecordIntakeMutation;
use crate::modules::hydration::use_cases::schedule_reminders::inbound::graphql::ScheduleRemindersMutation;
use crate::modules::hydration::use_cases::session::inbound::graphql::SessionMutation;
use crate::modules::hydration::use_cases::set_goal::inbound::graphql::SetGoalMutation;
use crate::modules::hydration::use_cases::sign_up::inbound::graphql::SignUpMutation;
use crate::shell::auth::{CurrentUser, resolve_current_user};
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(DailyAggregateQueryRoot, ProfileQueryRoot);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    RecordIntakeMutation,
    DeleteIntakeMutation,
    SetGoalMutation,
    ScheduleRemindersMutation,
    SignUpMutation,
    SessionMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Resolvers that need a signed-in caller read it from request data.
pub fn current_user<'a>(context: &Context<'a>) -> GqlResult<&'a CurrentUser> {
    context.data_opt::<CurrentUser>().ok_or_else(|| {
        LedgerError::Authentication("missing or unknown bearer token".into()).extend()
    })
}

pub async fn graphql(
    State(state): State<AppState>,
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    match resolve_current_user(&state, &headers).await {
        Ok(user) => request = request.data(user),
        Err(e) => debug!(error = %e, "graphql request without a session"),
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
