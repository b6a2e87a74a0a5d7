use crate::{AppState, CurrentSession, SESSION_HEADER};

use hm_db::SchemaManager;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

async fn create_test_state() -> AppState {
    let options = SqliteConnectOptions::new().filename(":memory:");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    SchemaManager::new(pool.clone())
        .create_schema()
        .await
        .expect("Failed to create schema");

    AppState::new(pool)
}

#[tokio::test]
async fn test_extractor_with_active_session() {
    let state = create_test_state().await;
    let session = state.sessions.start("alice").await;
    let request = Request::builder()
        .header(SESSION_HEADER, session.id.to_string())
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentSession::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    let CurrentSession(resolved) = result.unwrap();
    assert_eq!(resolved.username, "alice");
    assert_eq!(resolved.id, session.id);
}

#[tokio::test]
async fn test_extractor_without_header_is_rejected() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentSession::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_extractor_with_malformed_header_is_rejected() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header(SESSION_HEADER, "not-a-session")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentSession::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_extractor_after_logout_is_rejected() {
    let state = create_test_state().await;
    let session = state.sessions.start("alice").await;
    state.sessions.end(session.id).await;
    let request = Request::builder()
        .header(SESSION_HEADER, session.id.to_string())
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentSession::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
}
