use hm_core::BmiTrendPoint;

use serde::Serialize;

/// BMI over time for charting, oldest first
#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub points: Vec<BmiTrendPoint>,
}
