use crate::modules::hydration::core::errors::LedgerError;
use crate::modules::hydration::core::profile::Profile;
use crate::shared::infrastructure::records::ProfileStore;
use std::sync::Arc;
use tracing::{error, instrument};

pub struct GetProfileHandler<TProfiles>
where
    TProfiles: ProfileStore + Send + Sync + 'static,
{
    profiles: Arc<TProfiles>,
}

impl<TProfiles> GetProfileHandler<TProfiles>
where
    TProfiles: ProfileStore + Send + Sync + 'static,
{
    pub fn new(profiles: Arc<TProfiles>) -> Self {
        Self { profiles }
    }

    #[instrument(skip(self))]
    pub async fn get(&self, user_id: &str) -> Result<Profile, LedgerError> {
        let row = self.profiles.find(user_id).await.map_err(|e| {
            error!(error = %e, "failed to load profile");
            LedgerError::from(e)
        })?;
        row.map(Profile::from)
            .ok_or_else(|| LedgerError::NotFound(format!("no profile for user {user_id}")))
    }
}
