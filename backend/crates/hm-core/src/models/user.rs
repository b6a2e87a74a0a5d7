//! User entity - an account that owns health records.

use serde::{Deserialize, Serialize};

/// A registered account.
/// Created at registration and never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique primary identifier
    pub username: String,
    /// One-way digest of the password, never the plaintext
    #[serde(skip_serializing)]
    pub password_digest: String,
}

impl User {
    pub fn new(username: String, password_digest: String) -> Self {
        Self {
            username,
            password_digest,
        }
    }
}
