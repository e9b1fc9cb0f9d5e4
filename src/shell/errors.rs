// Outward mapping of ledger failures.
//
// HTTP gets a status plus `{"error", "code"}`; GraphQL gets the same message with a `code` extension.

use async_graphql::ErrorExtensions;
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::modules::hydration::core::errors::{LedgerError, ValidationError};

impl LedgerError {
    pub fn status(&self) -> StatusCode {
        match self {
            LedgerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            LedgerError::Authentication(_) => StatusCode::UNAUTHORIZED,
            LedgerError::Authorization(_) => StatusCode::FORBIDDEN,
            LedgerError::NotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            LedgerError::NotificationUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<JsonRejection> for LedgerError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedRequest(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for LedgerError {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::MalformedRequest(rejection.body_text()).into()
    }
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.to_string(), "code": self.code() });
        (self.status(), Json(body)).into_response()
    }
}

impl ErrorExtensions for LedgerError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}
