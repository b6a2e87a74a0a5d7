use hm_auth::Session;

use serde::Serialize;

/// Session handle returned after a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Send back as `X-Session-Id` on every later request
    pub session_id: String,
    pub username: String,
}

impl From<Session> for LoginResponse {
    fn from(session: Session) -> Self {
        Self {
            session_id: session.id.to_string(),
            username: session.username,
        }
    }
}
