use std::fmt;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

/// Opaque identifier handed to the client at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logged-in context passed explicitly to every handler.
///
/// Created at login, dropped at logout or expiry, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            username: username.into(),
            created_at: Utc::now(),
        }
    }

    /// True once `ttl` has passed since the session was created.
    /// A TTL too large to represent never expires.
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        TimeDelta::from_std(ttl)
            .map(|ttl| now.signed_duration_since(self.created_at) >= ttl)
            .unwrap_or(false)
    }
}
