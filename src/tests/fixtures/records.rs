use crate::shared::infrastructure::records::{NewIntakeRow, ProfileRow};

pub fn make_new_intake_row(amount: u32, consumed_at: i64) -> NewIntakeRow {
    NewIntakeRow {
        user_id: "user-fixed-0001".to_string(),
        amount,
        consumed_at,
    }
}

pub fn make_profile_row() -> ProfileRow {
    ProfileRow {
        id: "user-fixed-0001".to_string(),
        full_name: "Teddy Test".to_string(),
        email: "teddy@example.com".to_string(),
        daily_goal: 2000,
    }
}
