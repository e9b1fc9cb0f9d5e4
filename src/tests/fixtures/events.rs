use crate::modules::hydration::core::intake::IntakeEvent;

pub fn make_intake_event(intake_id: &str, amount: u32, consumed_at: i64) -> IntakeEvent {
    IntakeEvent {
        intake_id: intake_id.to_string(),
        user_id: "user-fixed-0001".to_string(),
        amount,
        consumed_at,
    }
}
