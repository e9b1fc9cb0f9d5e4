// In memory implementation of the IntakeStore and ProfileStore ports.
//
// Purpose
// - Exercise the ledger without a database, in tests and local development.
//
// Responsibilities
// - Keep rows in maps keyed by id and assign ids on insert.
// - Apply the owner-only access policy on delete.
// - Fail every call while toggled offline.

use crate::shared::infrastructure::records::{
    IntakeRow, IntakeStore, NewIntakeRow, ProfileRow, ProfileStore, StoreError,
};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryRecords {
    intakes: RwLock<HashMap<String, IntakeRow>>,
    profiles: RwLock<HashMap<String, ProfileRow>>,
    is_offline: bool,
}

impl InMemoryRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Records store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl IntakeStore for InMemoryRecords {
    async fn insert(&self, row: NewIntakeRow) -> Result<IntakeRow, StoreError> {
        self.ensure_online()?;
        let stored = IntakeRow {
            id: Uuid::now_v7().to_string(),
            user_id: row.user_id,
            amount: row.amount,
            consumed_at: row.consumed_at,
        };
        self.intakes
            .write()
            .await
            .insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn list_between(
        &self,
        user_id: &str,
        from: i64,
        until: i64,
    ) -> Result<Vec<IntakeRow>, StoreError> {
        self.ensure_online()?;
        let guard = self.intakes.read().await;
        let mut rows: Vec<IntakeRow> = guard
            .values()
            .filter(|r| r.user_id == user_id && r.consumed_at >= from && r.consumed_at < until)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.consumed_at
                .cmp(&a.consumed_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(rows)
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<IntakeRow, StoreError> {
        self.ensure_online()?;
        let mut guard = self.intakes.write().await;
        match guard.get(id) {
            None => Err(StoreError::NotFound {
                table: "water_entries",
                id: id.to_string(),
            }),
            Some(row) if row.user_id != user_id => Err(StoreError::Forbidden {
                table: "water_entries",
                id: id.to_string(),
            }),
            Some(_) => guard.remove(id).ok_or_else(|| StoreError::NotFound {
                table: "water_entries",
                id: id.to_string(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl ProfileStore for InMemoryRecords {
    async fn create(&self, row: ProfileRow) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.profiles.write().await;
        if guard.contains_key(&row.id) {
            return Err(StoreError::Backend(format!(
                "profiles row {} already exists",
                row.id
            )));
        }
        guard.insert(row.id.clone(), row);
        Ok(())
    }

    async fn find(&self, user_id: &str) -> Result<Option<ProfileRow>, StoreError> {
        self.ensure_online()?;
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn update_daily_goal(&self, user_id: &str, daily_goal: u32) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.profiles.write().await;
        let profile = guard.get_mut(user_id).ok_or_else(|| StoreError::NotFound {
            table: "profiles",
            id: user_id.to_string(),
        })?;
        profile.daily_goal = daily_goal;
        Ok(())
    }
}
