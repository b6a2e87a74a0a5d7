//! Dashboard aggregates over a user's health records.

use crate::HealthRecord;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Overview shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// BMI of the most recently inserted record
    pub latest_bmi: f64,
    /// Mean recommended steps, truncated toward zero
    pub avg_steps: u32,
    pub total_records: usize,
    /// Calendar date of the newest timestamp
    pub last_entry_date: NaiveDate,
}

impl DashboardSummary {
    /// Summarize records given in insertion order.
    ///
    /// Returns `None` when there are no records, so callers can show an
    /// "empty" state instead of a zero-valued summary.
    pub fn from_records(records: &[HealthRecord]) -> Option<Self> {
        let latest = records.last()?;
        let last_entry = records.iter().map(|r| r.timestamp).max()?;

        let total_steps: u64 = records.iter().map(|r| u64::from(r.steps_recommended)).sum();
        let avg_steps = (total_steps / records.len() as u64) as u32;

        Some(Self {
            latest_bmi: latest.bmi,
            avg_steps,
            total_records: records.len(),
            last_entry_date: last_entry.date_naive(),
        })
    }
}
