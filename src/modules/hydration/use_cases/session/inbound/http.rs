use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::hydration::core::errors::LedgerError;
use crate::modules::hydration::use_cases::session::command::SignIn;
use crate::shell::auth::CurrentUser;
use crate::shell::state::AppState;

pub async fn sign_in(
    State(state): State<AppState>,
    body: Result<Json<SignIn>, JsonRejection>,
) -> Response {
    let Json(command) = match body {
        Ok(b) => b,
        Err(rejection) => return LedgerError::from(rejection).into_response(),
    };

    match state.session.sign_in(command).await {
        Ok(session) => Json(session).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn sign_out(State(state): State<AppState>, user: CurrentUser) -> Response {
    match state.session.sign_out(&user.access_token).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
