use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::{make_test_state, sign_up_teddy};

async fn call(app: &Router, method: Method, uri: &str, token: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"));
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn tracks_progress_through_record_delete_and_goal_change() {
    let state = make_test_state();
    let token = sign_up_teddy(&state).await.access_token;
    let app = router(state);

    let mut ids = Vec::new();
    for amount in [250, 500, 750] {
        let (status, event) = call(&app, Method::POST, "/intakes", &token, Some(json!({ "amount": amount }))).await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(event["intake_id"].as_str().unwrap().to_string());
    }

    let (_, today) = call(&app, Method::GET, "/daily-aggregate", &token, None).await;
    assert_eq!(today["total"], 1500);
    assert_eq!(today["progress"]["percentage_complete"], 75);
    assert_eq!(today["progress"]["remaining"], 500);
    assert_eq!(today["progress"]["units_remaining"], 2);
    assert_eq!(today["progress"]["goal_reached"], false);

    let (status, _) = call(&app, Method::DELETE, &format!("/intakes/{}", ids[0]), &token, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, today) = call(&app, Method::GET, "/daily-aggregate", &token, None).await;
    assert_eq!(today["total"], 1250);
    assert_eq!(today["events"].as_array().unwrap().len(), 2);

    let (status, _) = call(&app, Method::PUT, "/goal", &token, Some(json!({ "daily_goal": "1250" }))).await;
    assert_eq!(status, StatusCode::OK);
    let (_, today) = call(&app, Method::GET, "/daily-aggregate", &token, None).await;
    assert_eq!(today["goal"], 1250);
    assert_eq!(today["progress"]["progress_ratio"], 1.0);
    assert_eq!(today["progress"]["goal_reached"], true);
}

#[tokio::test]
async fn rejected_amounts_leave_the_day_untouched() {
    let state = make_test_state();
    let token = sign_up_teddy(&state).await.access_token;
    let app = router(state);

    for amount in [json!(-5), json!("abc"), json!("0"), json!("12abc")] {
        let (status, body) = call(&app, Method::POST, "/intakes", &token, Some(json!({ "amount": amount }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "VALIDATION");
    }

    let (_, today) = call(&app, Method::GET, "/daily-aggregate", &token, None).await;
    assert_eq!(today["total"], 0);
    assert!(today["events"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn another_user_cannot_delete_or_see_an_intake() {
    let state = make_test_state();
    let owner = sign_up_teddy(&state).await.access_token;
    let app = router(state);

    let (status, intruder) = call(
        &app,
        Method::POST,
        "/sign-up",
        "",
        Some(json!({
            "full_name": "Mallory",
            "email": "mallory@example.com",
            "password": "hunter22",
            "confirm_password": "hunter22",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let intruder = intruder["access_token"].as_str().unwrap().to_string();

    let (_, event) = call(&app, Method::POST, "/intakes", &owner, Some(json!({ "amount": "500" }))).await;
    let id = event["intake_id"].as_str().unwrap();

    let (status, _) = call(&app, Method::DELETE, &format!("/intakes/{id}"), &intruder, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, theirs) = call(&app, Method::GET, "/daily-aggregate", &intruder, None).await;
    assert_eq!(theirs["total"], 0);
    let (_, mine) = call(&app, Method::GET, "/daily-aggregate", &owner, None).await;
    assert_eq!(mine["total"], 500);
}

#[tokio::test]
async fn signing_out_revokes_access() {
    let state = make_test_state();
    let token = sign_up_teddy(&state).await.access_token;
    let app = router(state);

    let (status, _) = call(&app, Method::POST, "/sign-out", &token, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = call(&app, Method::GET, "/profile", &token, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHENTICATED");
}
