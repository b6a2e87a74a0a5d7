use hm_core::{BmiCategory, NewHealthRecord};

use serde::Serialize;

/// Derived metrics shown right after a submission
#[derive(Debug, Serialize)]
pub struct SubmitHealthDataResponse {
    pub id: i64,
    pub bmi: f64,
    /// e.g. "Overweight (Ideal: 18.5 - 24.9)"
    pub interpretation: &'static str,
    pub category: BmiCategory,
    pub steps_recommended: u32,
}

impl SubmitHealthDataResponse {
    pub fn new(id: i64, record: &NewHealthRecord, category: BmiCategory) -> Self {
        Self {
            id,
            bmi: record.bmi,
            interpretation: category.description(),
            category,
            steps_recommended: record.steps_recommended,
        }
    }
}
