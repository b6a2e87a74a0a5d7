use crate::{Gender, Goal, recommend_steps};

#[test]
fn test_recommend_steps_male_weight_loss() {
    assert_eq!(
        recommend_steps(80.0, 180.0, 30, Gender::Male, Goal::WeightLoss),
        8800
    );
}

#[test]
fn test_recommend_steps_other_weight_gain() {
    assert_eq!(
        recommend_steps(60.0, 165.0, 40, Gender::Other, Goal::WeightGain),
        6500
    );
}

#[test]
fn test_recommend_steps_all_combinations() {
    let cases = [
        (Gender::Male, Goal::WeightLoss, 8800),
        (Gender::Male, Goal::MuscleBuilding, 7700),
        (Gender::Male, Goal::WeightGain, 7150),
        (Gender::Female, Goal::WeightLoss, 8400),
        (Gender::Female, Goal::MuscleBuilding, 7350),
        (Gender::Female, Goal::WeightGain, 6825),
        (Gender::Other, Goal::WeightLoss, 8000),
        (Gender::Other, Goal::MuscleBuilding, 7000),
        (Gender::Other, Goal::WeightGain, 6500),
    ];

    for (gender, goal, expected) in cases {
        assert_eq!(
            recommend_steps(70.0, 175.0, 30, gender, goal),
            expected,
            "{gender} / {goal}"
        );
    }
}

// Weight, height and age are currently ignored by the recommendation.
// If this test starts failing, the formula was changed on purpose; update
// the expectations together with the change.
#[test]
fn test_recommend_steps_ignores_weight_height_and_age() {
    let baseline = recommend_steps(70.0, 175.0, 30, Gender::Female, Goal::MuscleBuilding);

    assert_eq!(
        recommend_steps(140.0, 175.0, 30, Gender::Female, Goal::MuscleBuilding),
        baseline
    );
    assert_eq!(
        recommend_steps(70.0, 120.0, 30, Gender::Female, Goal::MuscleBuilding),
        baseline
    );
    assert_eq!(
        recommend_steps(70.0, 175.0, 85, Gender::Female, Goal::MuscleBuilding),
        baseline
    );
}
