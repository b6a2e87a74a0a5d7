#![allow(dead_code)]

//! Test infrastructure for hm-server API tests

use hm_db::SchemaManager;
use hm_server::{AppState, SESSION_HEADER};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_USERNAME: &str = "alice";
pub const TEST_PASSWORD: &str = "s3cret";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new().filename(":memory:");
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    SchemaManager::new(pool.clone())
        .create_schema()
        .await
        .expect("Failed to create schema");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState::new(create_test_pool().await)
}

/// Build a JSON request, optionally carrying a session id
pub fn json_request(method: &str, uri: &str, session_id: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    if let Some(id) = session_id {
        builder = builder.header(SESSION_HEADER, id);
    }

    builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

/// Build a GET request, optionally carrying a session id
pub fn get_request(uri: &str, session_id: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);

    if let Some(id) = session_id {
        builder = builder.header(SESSION_HEADER, id);
    }

    builder.body(Body::empty()).unwrap()
}

/// Send one request through a fresh clone of the router
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response: Response<Body> = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Register and log in the default test user, returning the session id
pub async fn login_test_user(app: &Router) -> String {
    let (status, _) = send(
        app,
        json_request(
            "POST",
            "/api/v1/register",
            None,
            json!({
                "username": TEST_USERNAME,
                "password": TEST_PASSWORD,
                "confirm_password": TEST_PASSWORD,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = send(
        app,
        json_request(
            "POST",
            "/api/v1/login",
            None,
            json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    json["session_id"].as_str().unwrap().to_string()
}

/// A complete health data form: 70 kg, 175 cm, male, weight loss
pub fn valid_health_form() -> Value {
    json!({
        "name": "Alice",
        "gender": "Male",
        "goal": "Weight Loss",
        "age": 35,
        "weight": 70.0,
        "height": 175.0,
        "blood_pressure": "120/80",
    })
}
