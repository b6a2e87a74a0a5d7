use hm_core::{BmiCategory, Gender, Goal, HealthRecord};

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthRecordDto {
    pub id: i64,
    pub name: String,
    pub gender: Option<Gender>,
    pub goal: Option<Goal>,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub blood_pressure: String,
    pub bmi: f64,
    pub category: BmiCategory,
    pub steps_recommended: u32,
    pub timestamp: DateTime<Utc>,
}

impl From<HealthRecord> for HealthRecordDto {
    fn from(record: HealthRecord) -> Self {
        Self {
            category: record.bmi_category(),
            id: record.id,
            name: record.name,
            gender: record.gender,
            goal: record.goal,
            age: record.age,
            weight: record.weight,
            height: record.height,
            blood_pressure: record.blood_pressure,
            bmi: record.bmi,
            steps_recommended: record.steps_recommended,
            timestamp: record.timestamp,
        }
    }
}
