/// Removes one intake by id on behalf of its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteIntake {
    pub user_id: String,
    pub intake_id: String,
}
