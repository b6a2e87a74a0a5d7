use crate::{DbError, Result as DbErrorResult};

use hm_core::{BmiTrendPoint, Gender, Goal, HealthRecord, NewHealthRecord};

use std::str::FromStr;

use chrono::NaiveDateTime;
use sqlx::{FromRow, SqlitePool};

const TABLE: &str = "health_data";

#[derive(FromRow)]
struct HealthRecordRow {
    id: i64,
    username: String,
    name: String,
    gender: Option<String>,
    goal: Option<String>,
    age: i64,
    weight: f64,
    height: f64,
    blood_pressure: String,
    bmi: f64,
    steps_recommended: i64,
    // CURRENT_TIMESTAMP is UTC without an offset
    timestamp: NaiveDateTime,
}

impl TryFrom<HealthRecordRow> for HealthRecord {
    type Error = DbError;

    fn try_from(r: HealthRecordRow) -> DbErrorResult<Self> {
        Ok(HealthRecord {
            id: r.id,
            username: r.username,
            name: r.name,
            gender: r
                .gender
                .as_deref()
                .map(Gender::from_str)
                .transpose()
                .map_err(|e| DbError::invalid_row(TABLE, format!("gender: {}", e)))?,
            goal: r
                .goal
                .as_deref()
                .map(Goal::from_str)
                .transpose()
                .map_err(|e| DbError::invalid_row(TABLE, format!("goal: {}", e)))?,
            age: u32::try_from(r.age)
                .map_err(|_| DbError::invalid_row(TABLE, format!("age out of range: {}", r.age)))?,
            weight: r.weight,
            height: r.height,
            blood_pressure: r.blood_pressure,
            bmi: r.bmi,
            steps_recommended: u32::try_from(r.steps_recommended).map_err(|_| {
                DbError::invalid_row(
                    TABLE,
                    format!("steps_recommended out of range: {}", r.steps_recommended),
                )
            })?,
            timestamp: r.timestamp.and_utc(),
        })
    }
}

#[derive(FromRow)]
struct TrendRow {
    timestamp: NaiveDateTime,
    bmi: f64,
}

pub struct HealthRecordRepository {
    pool: SqlitePool,
}

impl HealthRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append one record. The timestamp is assigned by the database.
    /// Returns the new row id.
    pub async fn insert(&self, record: &NewHealthRecord) -> DbErrorResult<i64> {
        let result = sqlx::query(
            r#"
                INSERT INTO health_data (
                    username, name, gender, goal, age, weight, height,
                    blood_pressure, bmi, steps_recommended
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.username)
        .bind(&record.name)
        .bind(record.gender.as_str())
        .bind(record.goal.as_str())
        .bind(i64::from(record.age))
        .bind(record.weight)
        .bind(record.height)
        .bind(&record.blood_pressure)
        .bind(record.bmi)
        .bind(i64::from(record.steps_recommended))
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// All records of a user in insertion order
    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Vec<HealthRecord>> {
        let rows = sqlx::query_as::<_, HealthRecordRow>(
            r#"
                SELECT id, username, name, gender, goal, age, weight, height,
                    blood_pressure, bmi, steps_recommended, timestamp
                FROM health_data
                WHERE username = ?
                ORDER BY id ASC
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(HealthRecord::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// `(timestamp, bmi)` pairs for charting, oldest first
    pub async fn find_bmi_trend(&self, username: &str) -> DbErrorResult<Vec<BmiTrendPoint>> {
        let rows = sqlx::query_as::<_, TrendRow>(
            r#"
                SELECT timestamp, bmi
                FROM health_data
                WHERE username = ?
                ORDER BY timestamp ASC, id ASC
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| BmiTrendPoint {
                timestamp: r.timestamp.and_utc(),
                bmi: r.bmi,
            })
            .collect())
    }

    pub async fn count_by_username(&self, username: &str) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM health_data WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
