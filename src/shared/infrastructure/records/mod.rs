// Record-oriented storage port over the `profiles` and `water_entries` tables.
//
// Boundaries
// - Access control (a user only touches their own rows) is enforced here, by the store.
// - Rows are committed atomically; a failed call leaves nothing behind.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IntakeRow {
    pub id: String,
    pub user_id: String,
    pub amount: u32,
    pub consumed_at: i64,
}

/// Insert shape for `water_entries`; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIntakeRow {
    pub user_id: String,
    pub amount: u32,
    pub consumed_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProfileRow {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub daily_goal: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{table} row {id} not found")]
    NotFound { table: &'static str, id: String },

    #[error("{table} row {id} is not owned by the requesting user")]
    Forbidden { table: &'static str, id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait IntakeStore: Send + Sync {
    async fn insert(&self, row: NewIntakeRow) -> Result<IntakeRow, StoreError>;

    /// Rows of `user_id` with `from <= consumed_at < until`, newest first.
    async fn list_between(
        &self,
        user_id: &str,
        from: i64,
        until: i64,
    ) -> Result<Vec<IntakeRow>, StoreError>;

    /// Removes by identifier only; returns the removed row.
    async fn delete(&self, user_id: &str, id: &str) -> Result<IntakeRow, StoreError>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn create(&self, row: ProfileRow) -> Result<(), StoreError>;
    async fn find(&self, user_id: &str) -> Result<Option<ProfileRow>, StoreError>;
    async fn update_daily_goal(&self, user_id: &str, daily_goal: u32) -> Result<(), StoreError>;
}

pub mod in_memory;
