use crate::modules::hydration::core::aggregate::DailyAggregate;
use crate::modules::hydration::core::day::LocalDay;
use crate::modules::hydration::core::errors::LedgerError;
use crate::modules::hydration::core::intake::IntakeEvent;
use crate::modules::hydration::use_cases::get_daily_aggregate::query::DailyAggregateQuery;
use crate::shared::core::primitives::DEFAULT_DAILY_GOAL_ML;
use crate::shared::infrastructure::records::{IntakeStore, ProfileStore};
use chrono::{DateTime, FixedOffset, Utc};
use std::sync::Arc;
use tokio::try_join;
use tracing::{debug, error, instrument, warn};

/// Reads the goal and the day's events and folds them. Nothing is cached between calls.
pub struct DailyAggregateHandler<TIntakes, TProfiles>
where
    TIntakes: IntakeStore + Send + Sync + 'static,
    TProfiles: ProfileStore + Send + Sync + 'static,
{
    intakes: Arc<TIntakes>,
    profiles: Arc<TProfiles>,
    default_offset: FixedOffset,
}

impl<TIntakes, TProfiles> DailyAggregateHandler<TIntakes, TProfiles>
where
    TIntakes: IntakeStore + Send + Sync + 'static,
    TProfiles: ProfileStore + Send + Sync + 'static,
{
    pub fn new(intakes: Arc<TIntakes>, profiles: Arc<TProfiles>, default_offset: FixedOffset) -> Self {
        Self {
            intakes,
            profiles,
            default_offset,
        }
    }

    pub async fn handle(
        &self,
        user_id: &str,
        query: DailyAggregateQuery,
        now: DateTime<Utc>,
    ) -> Result<DailyAggregate, LedgerError> {
        let day = query.resolve_day(self.default_offset, now)?;
        self.get(user_id, day).await
    }

    /// The refresh entry point: aggregate for the local day containing `now`.
    pub async fn today(
        &self,
        user_id: &str,
        now: DateTime<FixedOffset>,
    ) -> Result<DailyAggregate, LedgerError> {
        self.get(user_id, LocalDay::of(now)).await
    }

    #[instrument(skip(self), fields(date = %day.date, offset = day.utc_offset_minutes()))]
    pub async fn get(&self, user_id: &str, day: LocalDay) -> Result<DailyAggregate, LedgerError> {
        let (from, until) = day.window();
        let (profile, rows) = try_join!(
            self.profiles.find(user_id),
            self.intakes.list_between(user_id, from, until)
        )
        .map_err(|e| {
            error!(error = %e, "failed to load daily aggregate");
            LedgerError::from(e)
        })?;

        let goal = match profile {
            Some(p) => p.daily_goal,
            None => {
                warn!(user_id, "no profile found, using the default goal");
                DEFAULT_DAILY_GOAL_ML
            }
        };

        let aggregate = DailyAggregate::fold(day, goal, rows.into_iter().map(IntakeEvent::from));
        debug!(
            events = aggregate.events.len(),
            total = aggregate.total,
            goal,
            "daily aggregate computed"
        );
        Ok(aggregate)
    }
}
