use crate::modules::hydration::core::errors::LedgerError;
use crate::modules::hydration::use_cases::delete_intake::command::DeleteIntake;
use crate::shared::infrastructure::records::{IntakeStore, StoreError};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub struct DeleteIntakeHandler<TStore>
where
    TStore: IntakeStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteIntakeHandler<TStore>
where
    TStore: IntakeStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// A missing row and a row owned by someone else are indistinguishable to the caller.
    #[instrument(skip(self, command), fields(user_id = %command.user_id, intake_id = %command.intake_id))]
    pub async fn handle(&self, command: DeleteIntake) -> Result<(), LedgerError> {
        match self
            .store
            .delete(&command.user_id, &command.intake_id)
            .await
        {
            Ok(removed) => {
                info!(amount = removed.amount, "intake deleted");
                Ok(())
            }
            Err(e @ (StoreError::NotFound { .. } | StoreError::Forbidden { .. })) => {
                warn!(error = %e, "intake delete refused");
                Err(LedgerError::Authorization(format!(
                    "intake {} cannot be deleted by this user",
                    command.intake_id
                )))
            }
            Err(e) => {
                error!(error = %e, "failed to delete intake");
                Err(e.into())
            }
        }
    }
}
