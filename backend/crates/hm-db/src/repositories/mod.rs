pub mod health_record_repository;
pub mod user_repository;
