use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::shell::auth::CurrentUser;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, user: CurrentUser) -> Response {
    match state.get_profile.get(&user.user_id).await {
        Ok(profile) => Json(profile).into_response(),
        Err(e) => e.into_response(),
    }
}
