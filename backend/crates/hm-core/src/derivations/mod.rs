//! Pure functions deriving metrics from a health submission.

pub mod bmi;
pub mod steps;
