use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::{
    model::api::SHARER_USER_HEADER,
    server::{router::router, state::AppState},
};


/// Builds the server router over a fresh in-memory database.
///
/// The context is returned so the database outlives the router.
async fn test_app() -> (TestContext, Router) {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();
    let app = router().with_state(AppState::new(db));

    (test, app)
}

/// Sends a request and returns the status with the decoded JSON body, or `Value::Null`
/// for empty bodies.
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    user_id: Option<i32>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(SHARER_USER_HEADER, user_id.to_string());
    }
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

async fn create_user(app: &Router, name: &str, email: &str) -> i32 {
    let (status, body) = send(
        app,
        Method::POST,
        "/users",
        None,
        Some(json!({ "name": name, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    body["id"].as_i64().unwrap() as i32
}

async fn create_item(app: &Router, owner_id: i32, name: &str) -> i32 {
    let (status, body) = send(
        app,
        Method::POST,
        "/items",
        Some(owner_id),
        Some(json!({ "name": name, "description": format!("{} for rent", name), "available": true })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    body["id"].as_i64().unwrap() as i32
}

#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/bookings/{booking_id}"].is_object());
    assert!(body["paths"]["/items/search"].is_object());
}
