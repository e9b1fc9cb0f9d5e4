use crate::shared::infrastructure::records::ProfileRow;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub daily_goal: u32,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            user_id: row.id,
            full_name: row.full_name,
            email: row.email,
            daily_goal: row.daily_goal,
        }
    }
}
