use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub username: String,
}
