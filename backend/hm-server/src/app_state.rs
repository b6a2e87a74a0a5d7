use hm_auth::SessionRegistry;

use std::time::Duration;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            sessions: SessionRegistry::new(),
        }
    }

    /// State whose sessions expire `session_ttl` after login
    pub fn with_session_ttl(pool: SqlitePool, session_ttl: Duration) -> Self {
        Self {
            pool,
            sessions: SessionRegistry::with_ttl(session_ttl),
        }
    }
}
