use crate::HealthRecordDto;

use serde::Serialize;

/// All records of the logged-in user, oldest first
#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    pub records: Vec<HealthRecordDto>,
}
