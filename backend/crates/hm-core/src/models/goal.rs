use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Fitness goal chosen by the user; drives the step recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[serde(rename = "Muscle Building")]
    MuscleBuilding,
    #[serde(rename = "Weight Gain")]
    WeightGain,
}

impl Goal {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleBuilding => "Muscle Building",
            Self::WeightGain => "Weight Gain",
        }
    }
}

impl FromStr for Goal {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "Weight Loss" => Ok(Self::WeightLoss),
            "Muscle Building" => Ok(Self::MuscleBuilding),
            "Weight Gain" => Ok(Self::WeightGain),
            _ => Err(CoreError::InvalidGoal {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
