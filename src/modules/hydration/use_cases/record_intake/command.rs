/// Raw user intent to log a drink. `amount` is still free text at this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIntake {
    pub user_id: String,
    pub amount: String,
    pub consumed_at: i64,
}
