pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, logout, register},
        login_request::LoginRequest,
        login_response::LoginResponse,
        logout_response::LogoutResponse,
        register_request::RegisterRequest,
        register_response::RegisterResponse,
    },
    dashboard::{dashboard::dashboard, dashboard_response::DashboardResponse},
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_session::{CurrentSession, SESSION_HEADER},
    health_data::{
        health_data::{list_records, submit_health_data},
        health_record_dto::HealthRecordDto,
        record_list_response::RecordListResponse,
        submit_health_data_request::SubmitHealthDataRequest,
        submit_health_data_response::SubmitHealthDataResponse,
    },
    trend::{trend::trend, trend_response::TrendResponse},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
