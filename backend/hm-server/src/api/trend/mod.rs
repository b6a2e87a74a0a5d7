pub mod trend;
pub mod trend_response;
