//! User repository: registration and credential lookup.
//!
//! Passwords are reduced to their digest before they touch SQL. Lookups
//! compare the digest in the query itself, so an unknown username and a
//! wrong password are indistinguishable to the caller.

use crate::Result as DbErrorResult;

use hm_auth::digest;
use hm_core::User;

use log::debug;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct UserRow {
    username: String,
    password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.username, row.password)
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new account.
    ///
    /// Returns `Ok(false)` when the username is already taken; the existing
    /// row is left untouched.
    pub async fn register(&self, username: &str, password: &str) -> DbErrorResult<bool> {
        let password_digest = digest(password);

        let result = sqlx::query(
            r#"
                INSERT INTO users (username, password)
                VALUES (?, ?)
                ON CONFLICT(username) DO NOTHING
            "#,
        )
        .bind(username)
        .bind(&password_digest)
        .execute(&self.pool)
        .await?;

        let created = result.rows_affected() == 1;
        if !created {
            debug!("Registration rejected, username '{}' exists", username);
        }

        Ok(created)
    }

    /// Find the user whose username AND password digest both match
    pub async fn authenticate(&self, username: &str, password: &str) -> DbErrorResult<Option<User>> {
        let password_digest = digest(password);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT username, password
                FROM users
                WHERE username = ? AND password = ?
            "#,
        )
        .bind(username)
        .bind(&password_digest)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT username, password
                FROM users
                WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
