use crate::BmiCategory;

const UNDERWEIGHT_BELOW: f64 = 18.5;
const NORMAL_MAX: f64 = 24.9;
const OVERWEIGHT_MIN: f64 = 25.0;
const OVERWEIGHT_MAX: f64 = 29.9;

/// Body Mass Index from weight in kilograms and height in centimeters,
/// rounded to 2 decimal places. Exact ties round to even.
///
/// `height_cm` must be positive; [`crate::HealthSubmission::validate`]
/// guarantees that for submitted data.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi * 100.0).round_ties_even() / 100.0
}

/// Map a BMI value onto its weight category.
///
/// Both ends of each band are inclusive. Values between the bands
/// (24.9 < bmi < 25 and 29.9 < bmi < 30) fall through to `Obese`.
pub fn interpret_bmi(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if (UNDERWEIGHT_BELOW..=NORMAL_MAX).contains(&bmi) {
        BmiCategory::Normal
    } else if (OVERWEIGHT_MIN..=OVERWEIGHT_MAX).contains(&bmi) {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}
