// Auth port: accounts and bearer sessions.
//
// Boundaries
// - The ledger only needs a stable user id from a session; credentials never leave this port.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("an account already exists for {0}")]
    EmailTaken(String),

    #[error("invalid login credentials")]
    InvalidCredentials,

    #[error("session expired or unknown")]
    UnknownSession,

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Creates the account and returns its user id.
    async fn sign_up(&self, email: &str, password: &str) -> Result<String, AuthError>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
    async fn current_session(&self, access_token: &str) -> Result<Option<Session>, AuthError>;
}

pub mod in_memory;
