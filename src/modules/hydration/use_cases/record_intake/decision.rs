use crate::modules::hydration::core::errors::ValidationError;
use crate::shared::infrastructure::records::NewIntakeRow;

pub enum Decision {
    Accepted { intake: NewIntakeRow },
    Rejected { reason: ValidationError },
}
