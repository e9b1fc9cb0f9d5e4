// In memory implementation of the AuthProvider port.
//
// Responsibilities
// - Keep accounts keyed by normalised email with argon2-encoded passwords.
// - Issue opaque session tokens and forget them on sign-out.

use crate::shared::infrastructure::auth::{AuthError, AuthProvider, Session};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

struct Account {
    user_id: String,
    password_hash: String,
}

#[derive(Default)]
pub struct InMemoryAuth {
    accounts: RwLock<HashMap<String, Account>>,
    sessions: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), AuthError> {
        if self.is_offline {
            return Err(AuthError::Backend("Auth provider offline".into()));
        }
        Ok(())
    }
}

fn normalise_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = Uuid::new_v4();
    argon2::hash_encoded(
        password.as_bytes(),
        salt.as_bytes(),
        &argon2::Config::default(),
    )
    .map_err(|e| AuthError::Backend(e.to_string()))
}

fn verify_password(hash: &str, password: &str) -> bool {
    argon2::verify_encoded(hash, password.as_bytes()).unwrap_or(false)
}

#[async_trait::async_trait]
impl AuthProvider for InMemoryAuth {
    async fn sign_up(&self, email: &str, password: &str) -> Result<String, AuthError> {
        self.ensure_online()?;
        let email = normalise_email(email);
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&email) {
            return Err(AuthError::EmailTaken(email));
        }
        let user_id = Uuid::now_v7().to_string();
        accounts.insert(
            email,
            Account {
                user_id: user_id.clone(),
                password_hash: hash_password(password)?,
            },
        );
        Ok(user_id)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.ensure_online()?;
        let user_id = {
            let accounts = self.accounts.read().await;
            match accounts.get(&normalise_email(email)) {
                Some(account) if verify_password(&account.password_hash, password) => {
                    account.user_id.clone()
                }
                _ => return Err(AuthError::InvalidCredentials),
            }
        };
        let access_token = Uuid::new_v4().simple().to_string();
        self.sessions
            .write()
            .await
            .insert(access_token.clone(), user_id.clone());
        Ok(Session {
            access_token,
            user_id,
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        self.ensure_online()?;
        self.sessions
            .write()
            .await
            .remove(access_token)
            .map(|_| ())
            .ok_or(AuthError::UnknownSession)
    }

    async fn current_session(&self, access_token: &str) -> Result<Option<Session>, AuthError> {
        self.ensure_online()?;
        Ok(self
            .sessions
            .read()
            .await
            .get(access_token)
            .map(|user_id| Session {
                access_token: access_token.to_string(),
                user_id: user_id.clone(),
            }))
    }
}
