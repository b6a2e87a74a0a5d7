pub mod derivations;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use derivations::bmi::{compute_bmi, interpret_bmi};
pub use derivations::steps::recommend_steps;
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::bmi_category::BmiCategory;
pub use models::bmi_trend_point::BmiTrendPoint;
pub use models::dashboard_summary::DashboardSummary;
pub use models::gender::Gender;
pub use models::goal::Goal;
pub use models::health_record::HealthRecord;
pub use models::health_submission::HealthSubmission;
pub use models::new_health_record::NewHealthRecord;
pub use models::user::User;
