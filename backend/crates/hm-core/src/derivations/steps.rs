use crate::{Gender, Goal};

const BASE_STEPS: u32 = 6000;

/// Recommended daily steps for a goal and gender.
///
/// Weight, height and age are accepted but currently do not influence the
/// result. Tests pin this so that changing it is a deliberate decision.
pub fn recommend_steps(_weight: f64, _height: f64, _age: u32, gender: Gender, goal: Goal) -> u32 {
    let base = BASE_STEPS + goal_bonus(goal);

    // Factor in thousandths keeps the floor exact (1.1 -> 1100)
    base * gender_factor_permille(gender) / 1000
}

fn goal_bonus(goal: Goal) -> u32 {
    match goal {
        Goal::WeightLoss => 2000,
        Goal::MuscleBuilding => 1000,
        Goal::WeightGain => 500,
    }
}

fn gender_factor_permille(gender: Gender) -> u32 {
    match gender {
        Gender::Male => 1100,
        Gender::Female => 1050,
        Gender::Other => 1000,
    }
}
