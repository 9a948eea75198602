//! Gateway forwarding against a live server bound to a local port.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use shareit::{
    gateway::{self, client::ShareItClient, state::GatewayState},
    model::api::SHARER_USER_HEADER,
    server::{self, state::AppState},
};
use test_utils::{builder::TestBuilder, context::TestContext};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Starts the server on an ephemeral port and returns its base URL.
async fn spawn_server() -> (TestContext, String) {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let app = server::router::router().with_state(AppState::new(test.db.clone().unwrap()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (test, format!("http://{}", addr))
}

fn gateway_app(server_url: &str) -> Router {
    let client = ShareItClient::new(server_url).unwrap();
    gateway::router::router().with_state(GatewayState::new(client))
}

/// Base URL of a port nothing listens on.
async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}", addr)
}

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

fn timestamp(hours_from_now: i64) -> String {
    (Utc::now().naive_utc() + Duration::hours(hours_from_now))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

#[tokio::test]
async fn relays_server_responses() {
    let (_test, server_url) = spawn_server().await;
    let app = gateway_app(&server_url);

    let user_id = create_user(&app, "Alice", "alice@example.com").await;

    let (status, body) = send(&app, Method::GET, &format!("/users/{}", user_id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "alice@example.com");

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        None,
        Some(json!({ "name": "Other Alice", "email": "alice@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("alice@example.com"));

    let (status, body) = send(&app, Method::GET, "/users/999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, Method::DELETE, &format!("/users/{}", user_id), None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn forwards_booking_flow() {
    let (_test, server_url) = spawn_server().await;
    let app = gateway_app(&server_url);

    let owner_id = create_user(&app, "Owner", "owner@example.com").await;
    let booker_id = create_user(&app, "Booker", "booker@example.com").await;

    let (status, item) = send(
        &app,
        Method::POST,
        "/items",
        Some(owner_id),
        Some(json!({ "name": "Drill", "description": "Cordless drill", "available": true })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let item_id = item["id"].as_i64().unwrap();

    let (status, booking) = send(
        &app,
        Method::POST,
        "/bookings",
        Some(booker_id),
        Some(json!({ "itemId": item_id, "start": timestamp(1), "end": timestamp(2) })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(booking["status"], "WAITING");
    let booking_id = booking["id"].as_i64().unwrap();

    let (status, booking) = send(
        &app,
        Method::PATCH,
        &format!("/bookings/{}?approved=true", booking_id),
        Some(owner_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(booking["status"], "APPROVED");

    let (status, bookings) = send(
        &app,
        Method::GET,
        "/bookings/owner?state=future",
        Some(owner_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bookings.as_array().unwrap().len(), 1);

    let (status, items) = send(&app, Method::GET, "/items/search?text=DRILL", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items[0]["id"], item_id);
}

#[tokio::test]
async fn rejects_invalid_requests_without_forwarding() {
    // Validation failures never reach the server, so an unreachable one is fine.
    let app = gateway_app(&unreachable_url().await);

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        None,
        Some(json!({ "name": "Alice", "email": "not-an-email" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, Method::GET, "/items", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/bookings",
        Some(1),
        Some(json!({ "itemId": 1, "start": timestamp(-2), "end": timestamp(1) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/bookings?state=LATER", Some(1), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown state: LATER");

    let (status, _) = send(&app, Method::GET, "/requests/all?from=-1&size=10", Some(1), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unreachable_server_yields_bad_gateway() {
    let app = gateway_app(&unreachable_url().await);

    let (status, body) = send(&app, Method::GET, "/users", None, None).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "ShareIt server unavailable");
}
