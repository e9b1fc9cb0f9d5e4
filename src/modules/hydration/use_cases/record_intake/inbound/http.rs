use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::hydration::core::errors::LedgerError;
use crate::modules::hydration::core::milliliters::MlInput;
use crate::modules::hydration::use_cases::record_intake::command::RecordIntake;
use crate::shell::auth::CurrentUser;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RecordIntakeBody {
    pub amount: MlInput,
}

pub async fn handle(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<RecordIntakeBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return LedgerError::from(rejection).into_response(),
    };

    let command = RecordIntake {
        user_id: user.user_id,
        amount: body.amount.into_text(),
        consumed_at: Utc::now().timestamp_millis(),
    };

    match state.record_intake.handle(command).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(e) => e.into_response(),
    }
}
