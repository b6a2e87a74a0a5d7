use crate::{ApiResult, AppState, CurrentSession, DashboardResponse};

use hm_core::DashboardSummary;
use hm_db::HealthRecordRepository;

use axum::{Json, extract::State};

/// GET /api/v1/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> ApiResult<Json<DashboardResponse>> {
    let repo = HealthRecordRepository::new(state.pool.clone());
    let records = repo.find_by_username(&session.username).await?;

    Ok(Json(DashboardResponse {
        summary: DashboardSummary::from_records(&records),
    }))
}
