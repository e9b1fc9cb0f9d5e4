use crate::modules::hydration::core::errors::LedgerError;
use crate::modules::hydration::core::intake::IntakeEvent;
use crate::modules::hydration::use_cases::record_intake::command::RecordIntake;
use crate::modules::hydration::use_cases::record_intake::decide::decide_record_intake;
use crate::modules::hydration::use_cases::record_intake::decision::Decision;
use crate::shared::infrastructure::records::IntakeStore;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub struct RecordIntakeHandler<TStore>
where
    TStore: IntakeStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RecordIntakeHandler<TStore>
where
    TStore: IntakeStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Validates first; a rejected amount never reaches the store.
    #[instrument(skip(self, command), fields(user_id = %command.user_id))]
    pub async fn handle(&self, command: RecordIntake) -> Result<IntakeEvent, LedgerError> {
        match decide_record_intake(command) {
            Decision::Accepted { intake } => {
                let row = self.store.insert(intake).await.map_err(|e| {
                    error!(error = %e, "failed to record intake");
                    LedgerError::from(e)
                })?;
                info!(intake_id = %row.id, amount = row.amount, "intake recorded");
                Ok(row.into())
            }
            Decision::Rejected { reason } => {
                warn!(%reason, "intake rejected");
                Err(LedgerError::Validation(reason))
            }
        }
    }
}
