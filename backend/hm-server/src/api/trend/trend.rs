use crate::{ApiResult, AppState, CurrentSession, TrendResponse};

use hm_db::HealthRecordRepository;

use axum::{Json, extract::State};

/// GET /api/v1/trend
pub async fn trend(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> ApiResult<Json<TrendResponse>> {
    let repo = HealthRecordRepository::new(state.pool.clone());
    let points = repo.find_bmi_trend(&session.username).await?;

    Ok(Json(TrendResponse { points }))
}
