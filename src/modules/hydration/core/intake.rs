// A single recorded instance of water consumption.
//
// Lifecycle
// - Created when a user logs an intake, removed on explicit deletion, never mutated in place.

use crate::shared::infrastructure::records::IntakeRow;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IntakeEvent {
    pub intake_id: String,
    pub user_id: String,
    pub amount: u32,
    pub consumed_at: i64,
}

impl From<IntakeRow> for IntakeEvent {
    fn from(row: IntakeRow) -> Self {
        Self {
            intake_id: row.id,
            user_id: row.user_id,
            amount: row.amount,
            consumed_at: row.consumed_at,
        }
    }
}
