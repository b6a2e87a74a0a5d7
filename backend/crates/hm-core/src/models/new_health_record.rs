use crate::{
    Gender, Goal, HealthSubmission, Result as CoreErrorResult, compute_bmi, recommend_steps,
};

/// Insert payload for a health record.
/// The storage layer assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHealthRecord {
    pub username: String,
    pub name: String,
    pub gender: Gender,
    pub goal: Goal,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub blood_pressure: String,
    pub bmi: f64,
    pub steps_recommended: u32,
}

impl NewHealthRecord {
    /// Validate a submission and run the derivations on it
    #[track_caller]
    pub fn from_submission(
        username: impl Into<String>,
        submission: HealthSubmission,
    ) -> CoreErrorResult<Self> {
        submission.validate()?;

        let bmi = compute_bmi(submission.weight, submission.height);
        let steps_recommended = recommend_steps(
            submission.weight,
            submission.height,
            submission.age,
            submission.gender,
            submission.goal,
        );

        Ok(Self {
            username: username.into(),
            name: submission.name,
            gender: submission.gender,
            goal: submission.goal,
            age: submission.age,
            weight: submission.weight,
            height: submission.height,
            blood_pressure: submission.blood_pressure,
            bmi,
            steps_recommended,
        })
    }
}
