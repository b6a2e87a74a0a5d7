pub mod bmi_category;
pub mod bmi_trend_point;
pub mod dashboard_summary;
pub mod gender;
pub mod goal;
pub mod health_record;
pub mod health_submission;
pub mod new_health_record;
pub mod user;
