use hm_core::{Gender, Goal, HealthSubmission, NewHealthRecord};

/// Creates a complete, valid submission
pub fn create_test_submission() -> HealthSubmission {
    HealthSubmission {
        name: "Test Person".to_string(),
        gender: Gender::Male,
        goal: Goal::WeightLoss,
        age: 35,
        weight: 70.0,
        height: 175.0,
        blood_pressure: "120/80".to_string(),
    }
}

/// Creates an insert payload for a user with derivations applied
pub fn create_test_record(username: &str) -> NewHealthRecord {
    NewHealthRecord::from_submission(username, create_test_submission())
        .expect("Fixture submission must be valid")
}

/// Creates an insert payload with a specific weight (and so BMI)
pub fn create_test_record_with_weight(username: &str, weight: f64) -> NewHealthRecord {
    let mut submission = create_test_submission();
    submission.weight = weight;
    NewHealthRecord::from_submission(username, submission)
        .expect("Fixture submission must be valid")
}
