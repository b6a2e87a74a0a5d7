pub mod connection;
pub mod error;
pub mod repositories;
pub mod schema;

pub use connection::connection_manager::ConnectionManager;
pub use error::{DbError, Result};
pub use repositories::health_record_repository::HealthRecordRepository;
pub use repositories::user_repository::UserRepository;
pub use schema::schema_manager::SchemaManager;
