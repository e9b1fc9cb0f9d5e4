use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::hydration::core::aggregate::DailyAggregate;
use crate::modules::hydration::use_cases::get_daily_aggregate::query::DailyAggregateQuery;
use crate::modules::hydration::use_cases::record_intake::inbound::graphql::GqlIntake;
use crate::shell::graphql::current_user;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlDailyAggregate {
    pub date: String,
    pub utc_offset_minutes: i32,
    pub events: Vec<GqlIntake>,
    pub total: u64,
    pub goal: u32,
    pub progress_ratio: f64,
    pub percentage_complete: u32,
    pub remaining: u64,
    pub units_consumed: u64,
    pub units_remaining: u64,
    pub goal_reached: bool,
}

impl From<DailyAggregate> for GqlDailyAggregate {
    fn from(a: DailyAggregate) -> Self {
        let progress = a.progress();
        Self {
            date: a.date.format("%Y-%m-%d").to_string(),
            utc_offset_minutes: a.utc_offset_minutes,
            events: a.events.into_iter().map(Into::into).collect(),
            total: a.total,
            goal: a.goal,
            progress_ratio: progress.progress_ratio,
            percentage_complete: progress.percentage_complete,
            remaining: progress.remaining,
            units_consumed: progress.units_consumed,
            units_remaining: progress.units_remaining,
            goal_reached: progress.goal_reached,
        }
    }
}

#[derive(Default)]
pub struct DailyAggregateQueryRoot;

#[Object]
impl DailyAggregateQueryRoot {
    /// `date` is `YYYY-MM-DD`; both arguments default to today in the server's offset.
    async fn daily_aggregate(
        &self,
        context: &Context<'_>,
        date: Option<String>,
        utc_offset_minutes: Option<i32>,
    ) -> GqlResult<GqlDailyAggregate> {
        let state = context.data_unchecked::<AppState>();
        let user = current_user(context)?;

        let aggregate = state
            .daily_aggregate
            .handle(
                &user.user_id,
                DailyAggregateQuery {
                    date,
                    utc_offset_minutes,
                },
                Utc::now(),
            )
            .await
            .map_err(|e| e.extend())?;
        Ok(aggregate.into())
    }
}
