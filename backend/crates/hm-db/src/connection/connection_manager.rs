use crate::{DbError, Result, SchemaManager};

use std::panic::Location;
use std::path::PathBuf;
use std::time::Duration;

use error_location::ErrorLocation;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the single health database file and brings its schema up to date.
///
/// Each repository call borrows a connection from the pool for one statement
/// and returns it when the statement finishes, on success or error.
pub struct ConnectionManager {
    database_path: PathBuf,
    max_connections: u32,
}

impl ConnectionManager {
    pub fn new(database_path: impl Into<PathBuf>, max_connections: u32) -> Self {
        Self {
            database_path: database_path.into(),
            max_connections,
        }
    }

    pub async fn connect(&self) -> Result<SqlitePool> {
        // Create directory if it doesn't exist
        if let Some(parent) = self.database_path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create database directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&self.database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(options)
            .await?;

        info!(
            "Connected to database {} (max {} connections)",
            self.database_path.display(),
            self.max_connections
        );

        SchemaManager::new(pool.clone()).create_schema().await?;

        Ok(pool)
    }

    pub fn database_path(&self) -> &PathBuf {
        &self.database_path
    }
}
