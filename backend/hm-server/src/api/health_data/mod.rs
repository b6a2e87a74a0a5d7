pub mod health_data;
pub mod health_record_dto;
pub mod record_list_response;
pub mod submit_health_data_request;
pub mod submit_health_data_response;
