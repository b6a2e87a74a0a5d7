use crate::ApiError;

use hm_auth::AuthError;
use hm_core::CoreError;
use hm_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("Please fill all fields", Some("name"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "Please fill all fields");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_validation_error_without_field_omits_field() {
    let error = ApiError::validation("Passwords do not match", None);

    let (_, json) = body_json(error).await;

    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_username_exists_returns_409() {
    let error = ApiError::UsernameExists {
        username: "alice".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "USERNAME_EXISTS");
}

#[tokio::test]
async fn test_invalid_credentials_returns_401() {
    let error = ApiError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_core_validation_error_keeps_field() {
    let core_error = CoreError::validation("weight", "Please fill all fields");

    let api_error: ApiError = core_error.into();

    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Please fill all fields");
            assert_eq!(field.as_deref(), Some("weight"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_invalid_gender_converts_to_validation() {
    let core_error = CoreError::InvalidGender {
        value: "Robot".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = core_error.into();

    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("Robot"));
            assert_eq!(field.as_deref(), Some("gender"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_auth_error_converts_to_unauthorized() {
    let auth_error = AuthError::UnknownSession {
        session_id: "00000000-0000-0000-0000-000000000000".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = auth_error.into();

    assert!(matches!(api_error, ApiError::Unauthorized { .. }));
}

#[test]
fn test_db_error_converts_to_internal_without_details() {
    let db_error = DbError::Migration {
        message: "table users has no column named secret".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();

    match api_error {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Database operation failed");
        }
        _ => panic!("Expected Internal error"),
    }
}
