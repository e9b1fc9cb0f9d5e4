use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::hydration::core::errors::LedgerError;
use crate::modules::hydration::use_cases::sign_up::command::SignUp;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SignUp>, JsonRejection>,
) -> Response {
    let Json(command) = match body {
        Ok(b) => b,
        Err(rejection) => return LedgerError::from(rejection).into_response(),
    };

    match state.sign_up.handle(command).await {
        Ok(session) => (StatusCode::CREATED, Json(session)).into_response(),
        Err(e) => e.into_response(),
    }
}
