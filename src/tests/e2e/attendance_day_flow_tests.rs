use async_graphql::Request as GqlRequest;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::AUTHORIZATION},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shared::core::primitives::UserId;
use crate::shell::auth::Caller;
use crate::shell::graphql::build_schema;
use crate::shell::http::router;
use crate::tests::fixtures::commands::{CALLER, NOW};
use crate::tests::fixtures::state::{TOKEN, bearer, make_test_state};

const HOUR: i64 = 3_600_000;

async fn call(app: &Router, method: Method, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header(AUTHORIZATION, bearer(TOKEN))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn a_working_day_over_http() {
    let (state, clock) = make_test_state();
    let schema = build_schema(state.clone());
    let app = router(state, schema);

    let (status, _) = call(&app, Method::POST, "/attendance/check-in").await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, today) = call(&app, Method::GET, "/attendance/today").await;
    assert_eq!(today["checkIn"], NOW);
    assert!(today["checkOut"].is_null());

    clock.advance_millis(9 * HOUR);
    let (status, record) = call(&app, Method::POST, "/attendance/check-out").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["workingHours"], 9.0);
    assert_eq!(record["overtime"], 1.0);

    let (status, again) = call(&app, Method::POST, "/attendance/check-in").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(again["error"], "Already checked in today");

    let (_, stats) = call(&app, Method::GET, "/attendance/stats").await;
    assert_eq!(stats["totalDays"], 1);
    assert_eq!(stats["averageHours"], 9.0);
    assert_eq!(stats["totalOvertime"], 1.0);
    assert_eq!(stats["compensatoryDays"], 0);

    let (_, records) = call(&app, Method::GET, "/attendance/records").await;
    assert_eq!(records.as_array().map(Vec::len), Some(1));
    assert_eq!(records[0]["date"], "2023-11-14");

    let (_, reset) = call(&app, Method::POST, "/attendance/reset-overtime").await;
    assert_eq!(reset["reset"], 1);

    let (_, stats) = call(&app, Method::GET, "/attendance/stats").await;
    assert_eq!(stats["totalOvertime"], 0.0);
    assert_eq!(stats["averageHours"], 9.0);
}

#[tokio::test]
async fn a_working_day_over_graphql() {
    let (state, clock) = make_test_state();
    let schema = build_schema(state);
    let caller = Caller(Some(UserId::new(CALLER)));

    let run = |query: &'static str| {
        let schema = schema.clone();
        let caller = caller.clone();
        async move {
            schema
                .execute(GqlRequest::new(query).data(caller))
                .await
        }
    };

    let response = run("mutation { checkIn }").await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    clock.advance_millis(10 * HOUR);
    let response = run("mutation { checkOut { date workingHours overtime checkOut } }").await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "checkOut": {
            "date": "2023-11-14",
            "workingHours": 10.0,
            "overtime": 2.0,
            "checkOut": NOW + 10 * HOUR,
        }})
    );

    let response = run("mutation { checkOut { id } }").await;
    assert_eq!(response.errors[0].message, "Already checked out today");
    let extensions = serde_json::to_value(&response.errors[0].extensions).unwrap();
    assert_eq!(extensions["code"], "ALREADY_CHECKED_OUT");

    let response = run("{ me stats { totalDays totalOvertime compensatoryDays } }").await;
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "me": CALLER,
            "stats": { "totalDays": 1, "totalOvertime": 2.0, "compensatoryDays": 0 },
        })
    );

    let response = run("mutation { resetSpecificStats }").await;
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "resetSpecificStats": 1 })
    );

    let response = run("{ attendanceRecords { date workingHours overtime } }").await;
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "attendanceRecords": [
            { "date": "2023-11-14", "workingHours": 10.0, "overtime": 0.0 },
        ]})
    );
}

#[tokio::test]
async fn anonymous_graphql_callers_read_null_and_cannot_write() {
    let (state, _) = make_test_state();
    let schema = build_schema(state);

    let response = schema
        .execute("{ me todayStatus { id } stats { totalDays } attendanceRecords { date } }")
        .await;
    assert!(response.errors.is_empty());
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "me": null, "todayStatus": null, "stats": null, "attendanceRecords": null })
    );

    let response = schema.execute("mutation { checkIn }").await;
    assert_eq!(response.errors[0].message, "Not authenticated");
}
