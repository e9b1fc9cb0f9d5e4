use axum::{
    Extension, Router,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::hydration::use_cases::delete_intake::inbound::http as delete_intake_http;
use crate::modules::hydration::use_cases::get_daily_aggregate::inbound::http as daily_aggregate_http;
use crate::modules::hydration::use_cases::get_profile::inbound::http as get_profile_http;
use crate::modules::hydration::use_cases::record_intake::inbound::http as record_intake_http;
use crate::modules::hydration::use_cases::schedule_reminders::inbound::http as schedule_reminders_http;
use crate::modules::hydration::use_cases::session::inbound::http as session_http;
use crate::modules::hydration::use_cases::set_goal::inbound::http as set_goal_http;
use crate::modules::hydration::use_cases::sign_up::inbound::http as sign_up_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/sign-up", post(sign_up_http::handle))
        .route("/sign-in", post(session_http::sign_in))
        .route("/sign-out", post(session_http::sign_out))
        .route("/profile", get(get_profile_http::handle))
        .route("/intakes", post(record_intake_http::handle))
        .route("/intakes/{id}", delete(delete_intake_http::handle))
        .route("/daily-aggregate", get(daily_aggregate_http::handle))
        .route("/goal", put(set_goal_http::handle))
        .route("/reminders", post(schedule_reminders_http::handle))
        .route("/graphql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
