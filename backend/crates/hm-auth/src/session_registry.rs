use crate::{AuthError, Result as AuthErrorResult, Session, SessionId};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, info};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Lifetime of a session when none is configured
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// In-memory registry of logged-in sessions.
///
/// Sessions live only as long as the process; nothing is written to disk.
/// A session older than the registry's TTL no longer resolves, and expired
/// entries are dropped whenever a new session starts.
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<SessionId, Session>>>,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Open a session for an authenticated user
    pub async fn start(&self, username: &str) -> Session {
        let session = Session::new(username);
        let mut sessions = self.inner.write().await;

        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(self.ttl, now));
        if sessions.len() < before {
            debug!("Dropped {} expired sessions", before - sessions.len());
        }

        sessions.insert(session.id, session.clone());

        info!(
            "Session {} started for '{}' ({} active)",
            session.id,
            username,
            sessions.len()
        );

        session
    }

    /// Look up the session named by a raw session id string
    pub async fn resolve(&self, raw_id: &str) -> AuthErrorResult<Session> {
        let caller = Location::caller();

        let id = Uuid::parse_str(raw_id.trim())
            .map(SessionId)
            .map_err(|_| AuthError::MalformedSession {
                value: raw_id.to_string(),
                location: ErrorLocation::from(caller),
            })?;

        let mut sessions = self.inner.write().await;
        let expired = sessions
            .get(&id)
            .map(|session| session.is_expired(self.ttl, Utc::now()));

        match expired {
            Some(false) => {
                if let Some(session) = sessions.get(&id) {
                    return Ok(session.clone());
                }
            }
            Some(true) => {
                sessions.remove(&id);
                info!("Session {} expired", id);
            }
            None => {}
        }

        Err(AuthError::UnknownSession {
            session_id: id.to_string(),
            location: ErrorLocation::from(caller),
        })
    }

    /// Close a session. Returns false if it was not open.
    pub async fn end(&self, id: SessionId) -> bool {
        let mut sessions = self.inner.write().await;

        match sessions.remove(&id) {
            Some(session) => {
                info!(
                    "Session {} ended for '{}' ({} active)",
                    id,
                    session.username,
                    sessions.len()
                );
                true
            }
            None => {
                debug!("Session {id} was not active");
                false
            }
        }
    }

    /// Number of stored sessions, including expired ones not yet dropped
    pub async fn active_count(&self) -> usize {
        self.inner.read().await.len()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SessionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            ttl: self.ttl,
        }
    }
}
