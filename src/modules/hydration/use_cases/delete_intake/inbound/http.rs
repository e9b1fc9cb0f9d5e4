use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::hydration::use_cases::delete_intake::command::DeleteIntake;
use crate::shell::auth::CurrentUser;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(intake_id): Path<String>,
) -> Response {
    let command = DeleteIntake {
        user_id: user.user_id,
        intake_id,
    };

    match state.delete_intake.handle(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
