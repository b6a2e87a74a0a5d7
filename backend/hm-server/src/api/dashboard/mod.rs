pub mod dashboard;
pub mod dashboard_response;
