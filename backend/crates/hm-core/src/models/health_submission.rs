use crate::{CoreError, Gender, Goal, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// Raw body-metric entry as submitted by the user, before derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSubmission {
    pub name: String,
    pub gender: Gender,
    pub goal: Goal,
    pub age: u32,
    /// Kilograms
    pub weight: f64,
    /// Centimeters
    pub height: f64,
    /// Free text such as "120/80"; not parsed
    pub blood_pressure: String,
}

impl HealthSubmission {
    /// Reject the submission if any required field is empty or zero.
    ///
    /// Weight and height must also be finite and strictly positive so that
    /// the BMI computation never divides by zero.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::validation("name", "Please fill all fields"));
        }

        if self.age == 0 {
            return Err(CoreError::validation("age", "Please fill all fields"));
        }

        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(CoreError::validation(
                "weight",
                "Please fill all fields (weight must be positive)",
            ));
        }

        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(CoreError::validation(
                "height",
                "Please fill all fields (height must be positive)",
            ));
        }

        if self.blood_pressure.is_empty() {
            return Err(CoreError::validation(
                "blood_pressure",
                "Please fill all fields",
            ));
        }

        Ok(())
    }
}
