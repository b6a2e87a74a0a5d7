use hm_core::{CoreError, Gender, Goal, HealthSubmission};

use std::str::FromStr;

use serde::Deserialize;

/// Health data form as posted by the client.
///
/// Every field defaults when absent so that a partial form is reported as
/// a validation error naming the field, not as a JSON rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubmitHealthDataRequest {
    pub name: String,
    /// "Male", "Female" or "Other"
    pub gender: String,
    /// "Weight Loss", "Muscle Building" or "Weight Gain"
    pub goal: String,
    pub age: u32,
    /// Kilograms
    pub weight: f64,
    /// Centimeters
    pub height: f64,
    pub blood_pressure: String,
}

impl TryFrom<SubmitHealthDataRequest> for HealthSubmission {
    type Error = CoreError;

    fn try_from(req: SubmitHealthDataRequest) -> Result<Self, Self::Error> {
        if req.gender.is_empty() {
            return Err(CoreError::validation("gender", "Please fill all fields"));
        }
        if req.goal.is_empty() {
            return Err(CoreError::validation("goal", "Please fill all fields"));
        }

        Ok(HealthSubmission {
            name: req.name,
            gender: Gender::from_str(&req.gender)?,
            goal: Goal::from_str(&req.goal)?,
            age: req.age,
            weight: req.weight,
            height: req.height,
            blood_pressure: req.blood_pressure,
        })
    }
}
