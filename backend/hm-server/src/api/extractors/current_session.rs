//! Axum extractor for the logged-in session

use crate::{ApiError, AppState};

use hm_auth::{AuthError, Session};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Header carrying the id handed out by `POST /api/v1/login`
pub const SESSION_HEADER: &str = "X-Session-Id";

/// The session named by the `X-Session-Id` header.
///
/// Rejects with 401 when the header is absent, not a session id, or names a
/// session that has ended.
pub struct CurrentSession(pub Session);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let raw_id = parts
                .headers
                .get(SESSION_HEADER)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(|| AuthError::MissingSession {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let session = state.sessions.resolve(raw_id).await?;
            log::debug!("Request by '{}' ({})", session.username, session.id);

            Ok(CurrentSession(session))
        }
    }
}
