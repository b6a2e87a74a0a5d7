pub mod auth;
pub mod dashboard;
pub mod error;
pub mod extractors;
pub mod health_data;
pub mod trend;
