use hm_db::SchemaManager;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with the schema created
pub async fn create_test_pool() -> SqlitePool {
    let pool = create_empty_pool().await;

    SchemaManager::new(pool.clone())
        .create_schema()
        .await
        .expect("Failed to create schema");

    pool
}

/// Creates an in-memory SQLite pool without any tables
pub async fn create_empty_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool")
}

/// Creates the `health_data` table as older releases did, before the
/// `gender` and `goal` columns existed
pub async fn create_legacy_schema(pool: &SqlitePool) {
    sqlx::query("CREATE TABLE users (username TEXT PRIMARY KEY, password TEXT)")
        .execute(pool)
        .await
        .expect("Failed to create legacy users table");

    sqlx::query(
        r#"
            CREATE TABLE health_data (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT,
                name TEXT,
                age INTEGER,
                weight REAL,
                height REAL,
                blood_pressure TEXT,
                bmi REAL,
                steps_recommended INTEGER,
                timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
            )
        "#,
    )
    .execute(pool)
    .await
    .expect("Failed to create legacy health_data table");
}

/// Column names of a table in declaration order
pub async fn column_names(pool: &SqlitePool, table: &str) -> Vec<String> {
    SchemaManager::new(pool.clone())
        .column_names(table)
        .await
        .expect("Failed to read columns")
}
