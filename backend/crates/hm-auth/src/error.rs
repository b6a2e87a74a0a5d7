use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing session header {location}")]
    MissingSession { location: ErrorLocation },

    #[error("Malformed session id: {value} {location}")]
    MalformedSession {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown or expired session: {session_id} {location}")]
    UnknownSession {
        session_id: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingSession { .. } => "MISSING_SESSION",
            Self::MalformedSession { .. } => "MALFORMED_SESSION",
            Self::UnknownSession { .. } => "UNKNOWN_SESSION",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
