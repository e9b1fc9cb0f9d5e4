use crate::shared::infrastructure::auth::AuthError;
use crate::shared::infrastructure::notifier::NotifierError;
use crate::shared::infrastructure::records::StoreError;
use thiserror::Error;

/// Rule violations caught before any collaborator is called.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid amount in ml (got {0:?})")]
    AmountNotANumber(String),

    #[error("Amount must be greater than 0 ml (got {0})")]
    AmountNotPositive(i64),

    #[error("Please enter a valid goal amount (got {0:?})")]
    GoalNotANumber(String),

    #[error("Daily goal must be greater than 0 ml (got {0})")]
    GoalNotPositive(i64),

    #[error("{field} is out of range (got {value})")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Reminder window must satisfy start < end <= 24 (got {start}..{end})")]
    InvalidReminderWindow { start: u32, end: u32 },

    #[error("UTC offset of {0} minutes is not valid")]
    InvalidUtcOffset(i32),

    #[error("Date must be formatted as YYYY-MM-DD (got {0:?})")]
    InvalidDate(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("not signed in: {0}")]
    Authentication(String),

    #[error("not allowed: {0}")]
    Authorization(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("notifications unavailable: {0}")]
    NotificationUnavailable(String),
}

impl From<StoreError> for LedgerError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { .. } => LedgerError::NotFound(error.to_string()),
            StoreError::Forbidden { .. } => LedgerError::Authorization(error.to_string()),
            StoreError::Backend(message) => LedgerError::StorageUnavailable(message),
        }
    }
}

impl From<NotifierError> for LedgerError {
    fn from(error: NotifierError) -> Self {
        LedgerError::NotificationUnavailable(error.to_string())
    }
}

impl From<AuthError> for LedgerError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::EmailTaken(_) => LedgerError::Authorization(error.to_string()),
            AuthError::InvalidCredentials | AuthError::UnknownSession => {
                LedgerError::Authentication(error.to_string())
            }
            AuthError::Backend(message) => LedgerError::StorageUnavailable(message),
        }
    }
}

impl LedgerError {
    /// Stable machine-readable kind, used by inbound adapters.
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::Validation(_) => "VALIDATION",
            LedgerError::Authentication(_) => "UNAUTHENTICATED",
            LedgerError::Authorization(_) => "FORBIDDEN",
            LedgerError::NotFound(_) => "NOT_FOUND",
            LedgerError::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            LedgerError::NotificationUnavailable(_) => "NOTIFICATION_UNAVAILABLE",
        }
    }
}

#[cfg(test)]
mod ledger_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StoreError::NotFound { table: "profiles", id: "u-1".into() }, "NOT_FOUND")]
    #[case(StoreError::Forbidden { table: "water_entries", id: "e-1".into() }, "FORBIDDEN")]
    #[case(StoreError::Backend("down".into()), "STORAGE_UNAVAILABLE")]
    fn it_should_map_store_errors(#[case] error: StoreError, #[case] code: &str) {
        assert_eq!(LedgerError::from(error).code(), code);
    }

    #[rstest]
    #[case(AuthError::InvalidCredentials, "UNAUTHENTICATED")]
    #[case(AuthError::UnknownSession, "UNAUTHENTICATED")]
    #[case(AuthError::EmailTaken("a@b.c".into()), "FORBIDDEN")]
    #[case(AuthError::Backend("down".into()), "STORAGE_UNAVAILABLE")]
    fn it_should_map_auth_errors(#[case] error: AuthError, #[case] code: &str) {
        assert_eq!(LedgerError::from(error).code(), code);
    }

    #[rstest]
    fn it_should_keep_the_validation_message_verbatim() {
        let error = LedgerError::from(ValidationError::AmountNotANumber("abc".into()));
        assert_eq!(
            error.to_string(),
            "Please enter a valid amount in ml (got \"abc\")"
        );
    }
}
