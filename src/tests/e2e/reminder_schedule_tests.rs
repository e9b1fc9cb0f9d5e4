use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::modules::hydration::use_cases::set_goal::command::SetGoal;
use crate::shell::http::router;
use crate::tests::fixtures::state::{make_test_state, sign_up_teddy};

#[tokio::test]
async fn reschedules_against_the_latest_goal() {
    let state = make_test_state();
    let session = sign_up_teddy(&state).await;
    let app = router(state.clone());

    let schedule = || {
        Request::post("/reminders")
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {}", session.access_token))
            .body(Body::from(r#"{"start_hour":8,"end_hour":20}"#))
            .unwrap()
    };

    let first = app.clone().oneshot(schedule()).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    let bytes = first.into_body().collect().await.unwrap().to_bytes();
    let plan: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(plan["units_per_reminder"], 2);
    assert_eq!(plan["slots"].as_array().unwrap().len(), 6);

    state
        .set_goal
        .handle(SetGoal {
            user_id: session.user_id.clone(),
            daily_goal: "4000".into(),
        })
        .await
        .unwrap();

    let second = app.oneshot(schedule()).await.unwrap();
    let bytes = second.into_body().collect().await.unwrap().to_bytes();
    let plan: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(plan["units_per_reminder"], 3);
    assert_eq!(plan["slots"].as_array().unwrap().len(), 6);
}
