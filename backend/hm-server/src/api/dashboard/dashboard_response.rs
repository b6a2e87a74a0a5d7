use hm_core::DashboardSummary;

use serde::Serialize;

/// `summary` is null until the first record is stored
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub summary: Option<DashboardSummary>,
}
