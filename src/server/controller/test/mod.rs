use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router::router, service::password::PasswordService, state::AppState};


/// Builds the full application over a fresh in-memory database.
///
/// The context is returned alongside the router so the database outlives the test.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let app = router().with_state(AppState::new(db, PasswordService::insecure_for_tests()));

    (test, app)
}

/// Sends a request and decodes the JSON answer.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn post_empty(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::POST, uri, None).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// Serves the generated OpenAPI document.
#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app) = setup().await;

    let (status, body) = get(&app, "/api/docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/hotels/addNewHotel"].is_object());
    assert!(body["paths"]["/contactUs/resolveComplaint/{id}"].is_object());
}

/// Unknown routes are not part of the API.
#[tokio::test]
async fn answers_not_found_for_unknown_route() {
    let (_test, app) = setup().await;

    let (status, _) = get(&app, "/rooms/getAllRooms").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

fn hotel_california() -> Value {
    json!({
        "name": "Hotel California",
        "country": "USA",
        "city": "Los Angeles",
        "numberOfRooms": 120,
        "numberOfAvailableRooms": 45,
        "rating": 4.5
    })
}
