use crate::modules::hydration::core::milliliters::{MlField, parse_positive_ml};
use crate::modules::hydration::use_cases::record_intake::{
    command::RecordIntake, decision::Decision,
};
use crate::shared::infrastructure::records::NewIntakeRow;

pub fn decide_record_intake(command: RecordIntake) -> Decision {
    match parse_positive_ml(&command.amount, MlField::Amount) {
        Ok(amount) => Decision::Accepted {
            intake: NewIntakeRow {
                user_id: command.user_id,
                amount,
                consumed_at: command.consumed_at,
            },
        },
        Err(reason) => Decision::Rejected { reason },
    }
}
