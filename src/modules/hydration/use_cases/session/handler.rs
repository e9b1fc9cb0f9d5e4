use crate::modules::hydration::core::errors::{LedgerError, ValidationError};
use crate::modules::hydration::use_cases::session::command::SignIn;
use crate::shared::infrastructure::auth::{AuthProvider, Session};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Sign-in, sign-out and bearer token resolution.
pub struct SessionHandler<TAuth>
where
    TAuth: AuthProvider + Send + Sync + 'static,
{
    auth: Arc<TAuth>,
}

impl<TAuth> SessionHandler<TAuth>
where
    TAuth: AuthProvider + Send + Sync + 'static,
{
    pub fn new(auth: Arc<TAuth>) -> Self {
        Self { auth }
    }

    #[instrument(skip(self, command), fields(email = %command.email))]
    pub async fn sign_in(&self, command: SignIn) -> Result<Session, LedgerError> {
        if command.email.trim().is_empty() || command.password.is_empty() {
            return Err(ValidationError::MissingFields.into());
        }
        let session = self
            .auth
            .sign_in(command.email.trim(), &command.password)
            .await
            .map_err(|e| {
                warn!(error = %e, "sign-in failed");
                LedgerError::from(e)
            })?;
        info!(user_id = %session.user_id, "signed in");
        Ok(session)
    }

    #[instrument(skip_all)]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), LedgerError> {
        self.auth.sign_out(access_token).await?;
        info!("signed out");
        Ok(())
    }

    /// `None` for an unknown or revoked token.
    pub async fn current(&self, access_token: &str) -> Result<Option<Session>, LedgerError> {
        let session = self.auth.current_session(access_token).await?;
        if session.is_none() {
            debug!("bearer token did not resolve to a session");
        }
        Ok(session)
    }
}

#[cfg(test)]
mod session_handler_tests {
    use super::*;
    use crate::shared::infrastructure::auth::in_memory::InMemoryAuth;
    use rstest::{fixture, rstest};

    #[fixture]
    async fn before_each() -> Arc<InMemoryAuth> {
        let auth = InMemoryAuth::new();
        auth.sign_up("teddy@example.com", "secret1").await.unwrap();
        Arc::new(auth)
    }

    fn sign_in(email: &str, password: &str) -> SignIn {
        SignIn {
            email: email.into(),
            password: password.into(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_resolve_the_token_until_sign_out(#[future] before_each: Arc<InMemoryAuth>) {
        let handler = SessionHandler::new(before_each.await);

        let session = handler
            .sign_in(sign_in(" teddy@example.com ", "secret1"))
            .await
            .unwrap();
        assert_eq!(
            handler.current(&session.access_token).await,
            Ok(Some(session.clone()))
        );

        handler.sign_out(&session.access_token).await.unwrap();
        assert_eq!(handler.current(&session.access_token).await, Ok(None));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_wrong_password(#[future] before_each: Arc<InMemoryAuth>) {
        let handler = SessionHandler::new(before_each.await);
        let result = handler.sign_in(sign_in("teddy@example.com", "nope123")).await;
        assert!(matches!(result, Err(LedgerError::Authentication(_))));
    }

    #[rstest]
    #[case("", "secret1")]
    #[case("teddy@example.com", "")]
    #[tokio::test]
    async fn it_should_require_both_fields(
        #[future] before_each: Arc<InMemoryAuth>,
        #[case] email: &str,
        #[case] password: &str,
    ) {
        let handler = SessionHandler::new(before_each.await);
        let result = handler.sign_in(sign_in(email, password)).await;
        assert_eq!(
            result,
            Err(LedgerError::Validation(ValidationError::MissingFields))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_signing_out_twice(#[future] before_each: Arc<InMemoryAuth>) {
        let handler = SessionHandler::new(before_each.await);
        let session = handler
            .sign_in(sign_in("teddy@example.com", "secret1"))
            .await
            .unwrap();
        handler.sign_out(&session.access_token).await.unwrap();
        let again = handler.sign_out(&session.access_token).await;
        assert!(matches!(again, Err(LedgerError::Authentication(_))));
    }
}
