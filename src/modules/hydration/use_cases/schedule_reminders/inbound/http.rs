use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::hydration::core::errors::LedgerError;
use crate::modules::hydration::use_cases::schedule_reminders::command::ScheduleReminders;
use crate::shell::auth::CurrentUser;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct ScheduleRemindersBody {
    pub start_hour: Option<u32>,
    pub end_hour: Option<u32>,
    pub utc_offset_minutes: Option<i32>,
}

pub async fn handle(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<ScheduleRemindersBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return LedgerError::from(rejection).into_response(),
    };

    let command = ScheduleReminders {
        user_id: user.user_id,
        start_hour: body.start_hour,
        end_hour: body.end_hour,
        utc_offset_minutes: body.utc_offset_minutes,
        now: Utc::now(),
    };

    match state.schedule_reminders.handle(command).await {
        Ok(plan) => (StatusCode::CREATED, Json(plan)).into_response(),
        Err(e) => e.into_response(),
    }
}
