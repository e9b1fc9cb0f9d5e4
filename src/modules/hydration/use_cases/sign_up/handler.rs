use crate::modules::hydration::core::errors::LedgerError;
use crate::modules::hydration::use_cases::sign_up::command::SignUp;
use crate::modules::hydration::use_cases::sign_up::decide::decide_sign_up;
use crate::shared::core::primitives::DEFAULT_DAILY_GOAL_ML;
use crate::shared::infrastructure::auth::{AuthProvider, Session};
use crate::shared::infrastructure::records::{ProfileRow, ProfileStore};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Creates the account and its profile, then signs the new user in.
pub struct SignUpHandler<TAuth, TProfiles>
where
    TAuth: AuthProvider + Send + Sync + 'static,
    TProfiles: ProfileStore + Send + Sync + 'static,
{
    auth: Arc<TAuth>,
    profiles: Arc<TProfiles>,
}

impl<TAuth, TProfiles> SignUpHandler<TAuth, TProfiles>
where
    TAuth: AuthProvider + Send + Sync + 'static,
    TProfiles: ProfileStore + Send + Sync + 'static,
{
    pub fn new(auth: Arc<TAuth>, profiles: Arc<TProfiles>) -> Self {
        Self { auth, profiles }
    }

    #[instrument(skip(self, command), fields(email = %command.email))]
    pub async fn handle(&self, command: SignUp) -> Result<Session, LedgerError> {
        decide_sign_up(&command).map_err(|reason| {
            warn!(%reason, "sign-up rejected");
            LedgerError::Validation(reason)
        })?;

        let email = command.email.trim();
        let user_id = self.auth.sign_up(email, &command.password).await.map_err(|e| {
            warn!(error = %e, "account not created");
            LedgerError::from(e)
        })?;

        self.profiles
            .create(ProfileRow {
                id: user_id.clone(),
                full_name: command.full_name.trim().to_string(),
                email: email.to_string(),
                daily_goal: DEFAULT_DAILY_GOAL_ML,
            })
            .await
            .map_err(|e| {
                error!(error = %e, %user_id, "account created without a profile");
                LedgerError::from(e)
            })?;

        let session = self.auth.sign_in(email, &command.password).await?;
        info!(%user_id, "account created");
        Ok(session)
    }
}
