use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;

use crate::modules::hydration::core::errors::LedgerError;
use crate::modules::hydration::core::aggregate::DailyAggregate;
use crate::modules::hydration::core::progress::Progress;
use crate::modules::hydration::use_cases::get_daily_aggregate::query::DailyAggregateQuery;
use crate::shell::auth::CurrentUser;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DailyAggregateResponse {
    #[serde(flatten)]
    pub aggregate: DailyAggregate,
    pub progress: Progress,
}

impl From<DailyAggregate> for DailyAggregateResponse {
    fn from(aggregate: DailyAggregate) -> Self {
        let progress = aggregate.progress();
        Self {
            aggregate,
            progress,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<DailyAggregateQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return LedgerError::from(rejection).into_response(),
    };

    match state
        .daily_aggregate
        .handle(&user.user_id, query, Utc::now())
        .await
    {
        Ok(aggregate) => Json(DailyAggregateResponse::from(aggregate)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod daily_aggregate_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::hydration::use_cases::record_intake::command::RecordIntake;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{make_test_state, sign_up_teddy};

    use super::handle;

    // 2023-11-14T10:00:00Z
    const MID_MORNING: i64 = 1_699_956_000_000;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/daily-aggregate", get(handle))
            .with_state(state)
    }

    fn request(token: &str, query: &str) -> Request<Body> {
        Request::get(format!("/daily-aggregate?{query}"))
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_the_events_and_progress_of_the_day() {
        let state = make_test_state();
        let session = sign_up_teddy(&state).await;
        for amount in ["250", "500", "750"] {
            state
                .record_intake
                .handle(RecordIntake {
                    user_id: session.user_id.clone(),
                    amount: amount.into(),
                    consumed_at: MID_MORNING,
                })
                .await
                .unwrap();
        }

        let response = app(state)
            .oneshot(request(
                &session.access_token,
                "date=2023-11-14&utc_offset_minutes=0",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["date"], "2023-11-14");
        assert_eq!(json["total"], 1500);
        assert_eq!(json["goal"], 2000);
        assert_eq!(json["events"].as_array().unwrap().len(), 3);
        assert_eq!(json["progress"]["percentage_complete"], 75);
        assert_eq!(json["progress"]["units_remaining"], 2);
        assert_eq!(json["progress"]["goal_reached"], false);
    }

    #[tokio::test]
    async fn it_should_return_422_for_a_malformed_date() {
        let state = make_test_state();
        let session = sign_up_teddy(&state).await;

        let response = app(state)
            .oneshot(request(&session.access_token, "date=14/11/2023"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_422_for_a_non_numeric_offset() {
        let state = make_test_state();
        let session = sign_up_teddy(&state).await;

        let response = app(state)
            .oneshot(request(&session.access_token, "utc_offset_minutes=east"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "VALIDATION");
        assert!(json["error"].as_str().unwrap().starts_with("Malformed request"));
    }
}
