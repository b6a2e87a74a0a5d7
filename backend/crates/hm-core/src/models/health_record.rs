//! Health record entity - one timestamped body-metric entry.

use crate::{BmiCategory, Gender, Goal, interpret_bmi};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted health data entry.
/// Records are immutable once stored; there is no update or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: i64,
    /// Owning user (not enforced as a foreign key)
    pub username: String,
    /// Display name entered on the form
    pub name: String,
    /// `None` for rows stored before the column existed
    pub gender: Option<Gender>,
    /// `None` for rows stored before the column existed
    pub goal: Option<Goal>,
    pub age: u32,
    /// Kilograms
    pub weight: f64,
    /// Centimeters
    pub height: f64,
    pub blood_pressure: String,
    /// Rounded to 2 decimal places at submission time
    pub bmi: f64,
    pub steps_recommended: u32,
    /// Set by the storage layer at insert
    pub timestamp: DateTime<Utc>,
}

impl HealthRecord {
    pub fn bmi_category(&self) -> BmiCategory {
        interpret_bmi(self.bmi)
    }
}
