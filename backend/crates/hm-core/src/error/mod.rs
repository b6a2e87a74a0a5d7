use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid gender: {value} {location}")]
    InvalidGender {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid goal: {value} {location}")]
    InvalidGoal {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a single submitted field
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &'static str, message: S) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field name if this error concerns a specific input field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            Self::InvalidGender { .. } => Some("gender"),
            Self::InvalidGoal { .. } => Some("goal"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
