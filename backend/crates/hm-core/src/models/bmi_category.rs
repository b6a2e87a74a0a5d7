use serde::{Deserialize, Serialize};

/// Weight category derived from a BMI value.
///
/// See [`crate::interpret_bmi`] for the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Short category label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Label with the ideal range hint shown after a submission
    pub fn description(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight (Ideal: 18.5 - 24.9)",
            Self::Normal => "Normal (Ideal)",
            Self::Overweight => "Overweight (Ideal: 18.5 - 24.9)",
            Self::Obese => "Obese (Ideal: 18.5 - 24.9)",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
