//! Account REST API handlers
//!
//! Registration, login and logout. Login hands out a session id that the
//! client sends back in `X-Session-Id`.

use crate::{
    ApiError, ApiResult, AppState, CurrentSession, LoginRequest, LoginResponse, LogoutResponse,
    RegisterRequest, RegisterResponse,
};

use hm_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;

/// POST /api/v1/register
///
/// Create an account. The password is stored only as its digest.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(req) = payload?;

    if req.password != req.confirm_password {
        return Err(ApiError::validation(
            "Passwords do not match",
            Some("confirm_password"),
        ));
    }

    let repo = UserRepository::new(state.pool.clone());
    if !repo.register(&req.username, &req.password).await? {
        return Err(ApiError::UsernameExists {
            username: req.username,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Registered user '{}'", req.username);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            username: req.username,
        }),
    ))
}

/// POST /api/v1/login
///
/// Verify credentials and open a session
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(req) = payload?;
    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .authenticate(&req.username, &req.password)
        .await?
        .ok_or_else(|| ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        })?;

    let session = state.sessions.start(&user.username).await;

    Ok(Json(LoginResponse::from(session)))
}

/// POST /api/v1/logout
///
/// End the current session. The id is rejected by every later request.
pub async fn logout(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> ApiResult<Json<LogoutResponse>> {
    state.sessions.end(session.id).await;

    Ok(Json(LogoutResponse {
        status: "logged_out",
    }))
}
