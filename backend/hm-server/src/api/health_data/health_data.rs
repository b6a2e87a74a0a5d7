//! Health data REST API handlers

use crate::{
    ApiResult, AppState, CurrentSession, HealthRecordDto, RecordListResponse,
    SubmitHealthDataRequest, SubmitHealthDataResponse,
};

use hm_core::{HealthSubmission, NewHealthRecord};
use hm_db::HealthRecordRepository;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

/// POST /api/v1/health-data
///
/// Validate a form entry, derive BMI and steps, and store it
pub async fn submit_health_data(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    payload: Result<Json<SubmitHealthDataRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SubmitHealthDataResponse>)> {
    let Json(req) = payload?;
    let submission = HealthSubmission::try_from(req)?;
    let record = NewHealthRecord::from_submission(&session.username, submission)?;
    let category = hm_core::interpret_bmi(record.bmi);

    let repo = HealthRecordRepository::new(state.pool.clone());
    let id = repo.insert(&record).await?;

    log::info!(
        "Stored health record {} for '{}' (bmi {}, {})",
        id,
        session.username,
        record.bmi,
        category
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitHealthDataResponse::new(id, &record, category)),
    ))
}

/// GET /api/v1/records
///
/// List the user's records in insertion order
pub async fn list_records(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> ApiResult<Json<RecordListResponse>> {
    let repo = HealthRecordRepository::new(state.pool.clone());
    let records = repo.find_by_username(&session.username).await?;

    Ok(Json(RecordListResponse {
        records: records.into_iter().map(HealthRecordDto::from).collect(),
    }))
}
