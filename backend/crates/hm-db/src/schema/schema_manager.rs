//! Idempotent schema creation.
//!
//! Two steps, both safe to repeat:
//!
//! 1. Versioned migrations from `./migrations`. Applied versions are recorded
//!    in `_sqlx_migrations`, so a second run is a no-op. The statements use
//!    `IF NOT EXISTS` so databases created before migrations were tracked are
//!    adopted without error.
//! 2. Column reconciliation. `health_data` tables from older releases may lack
//!    columns added later (`gender`, `goal`). The live column list is read
//!    with `pragma_table_info` and only the missing columns are added.

use crate::{DbError, Result as DbErrorResult};

use std::collections::HashSet;
use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::migrate::Migrator;
use sqlx::{Row, SqlitePool};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Columns of `health_data` that can be added to an existing table.
/// `id` and `timestamp` are excluded: SQLite cannot add a primary key or a
/// column with a non-constant default via `ALTER TABLE`.
pub const HEALTH_DATA_ADDITIVE_COLUMNS: &[(&str, &str)] = &[
    ("username", "TEXT"),
    ("name", "TEXT"),
    ("gender", "TEXT"),
    ("goal", "TEXT"),
    ("age", "INTEGER"),
    ("weight", "REAL"),
    ("height", "REAL"),
    ("blood_pressure", "TEXT"),
    ("bmi", "REAL"),
    ("steps_recommended", "INTEGER"),
];

pub struct SchemaManager {
    pool: SqlitePool,
}

impl SchemaManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Ensure `users` and `health_data` exist with every expected column.
    ///
    /// Returns the names of columns that had to be added.
    pub async fn create_schema(&self) -> DbErrorResult<Vec<&'static str>> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let added = self.reconcile_health_data_columns().await?;

        if added.is_empty() {
            debug!("Schema up to date");
        } else {
            info!("Added missing health_data columns: {}", added.join(", "));
        }

        Ok(added)
    }

    /// Current column names of a table, in declaration order
    pub async fn column_names(&self, table: &str) -> DbErrorResult<Vec<String>> {
        let rows = sqlx::query("SELECT name FROM pragma_table_info(?) ORDER BY cid")
            .bind(table)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("name").map_err(DbError::from))
            .collect()
    }

    async fn reconcile_health_data_columns(&self) -> DbErrorResult<Vec<&'static str>> {
        let existing: HashSet<String> = self
            .column_names("health_data")
            .await?
            .into_iter()
            .map(|name| name.to_lowercase())
            .collect();

        let mut added = Vec::new();

        for (column, declared_type) in HEALTH_DATA_ADDITIVE_COLUMNS {
            if existing.contains(*column) {
                continue;
            }

            // Names come from the constant above, never from user input
            let statement = format!("ALTER TABLE health_data ADD COLUMN {column} {declared_type}");
            sqlx::query(&statement).execute(&self.pool).await?;
            added.push(*column);
        }

        Ok(added)
    }
}
