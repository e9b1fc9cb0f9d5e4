// Bearer token resolution for inbound adapters.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use tracing::warn;

use crate::modules::hydration::core::errors::LedgerError;
use crate::shell::state::AppState;

/// The signed-in caller, resolved from `Authorization: Bearer <token>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
    pub access_token: String,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

pub async fn resolve_current_user(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<CurrentUser, LedgerError> {
    let token = bearer_token(headers)
        .ok_or_else(|| LedgerError::Authentication("missing bearer token".into()))?;
    match state.session.current(token).await? {
        Some(session) => Ok(CurrentUser {
            user_id: session.user_id,
            access_token: session.access_token,
        }),
        None => {
            warn!("rejected unknown bearer token");
            Err(LedgerError::Authentication("session expired or unknown".into()))
        }
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = LedgerError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        resolve_current_user(state, &parts.headers).await
    }
}
