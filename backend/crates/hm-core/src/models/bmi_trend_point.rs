use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point of the BMI-over-time chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiTrendPoint {
    pub timestamp: DateTime<Utc>,
    pub bmi: f64,
}
