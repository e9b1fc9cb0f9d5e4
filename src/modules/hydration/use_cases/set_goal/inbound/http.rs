use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::hydration::core::errors::LedgerError;
use crate::modules::hydration::core::milliliters::MlInput;
use crate::modules::hydration::use_cases::set_goal::command::SetGoal;
use crate::shell::auth::CurrentUser;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SetGoalBody {
    pub daily_goal: MlInput,
}

pub async fn handle(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<SetGoalBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return LedgerError::from(rejection).into_response(),
    };

    let command = SetGoal {
        user_id: user.user_id,
        daily_goal: body.daily_goal.into_text(),
    };

    match state.set_goal.handle(command).await {
        Ok(daily_goal) => Json(json!({ "daily_goal": daily_goal })).into_response(),
        Err(e) => e.into_response(),
    }
}
