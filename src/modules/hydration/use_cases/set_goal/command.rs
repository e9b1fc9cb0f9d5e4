/// Overwrites the daily goal. `daily_goal` is still free text at this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetGoal {
    pub user_id: String,
    pub daily_goal: String,
}
