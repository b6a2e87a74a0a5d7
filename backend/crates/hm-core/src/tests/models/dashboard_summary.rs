use crate::{DashboardSummary, Gender, Goal, HealthRecord};

use chrono::{NaiveDate, TimeZone, Utc};
use googletest::prelude::*;

fn record(id: i64, bmi: f64, steps: u32, day: u32) -> HealthRecord {
    HealthRecord {
        id,
        username: "alex".to_string(),
        name: "Alex".to_string(),
        gender: Some(Gender::Other),
        goal: Some(Goal::MuscleBuilding),
        age: 29,
        weight: 72.0,
        height: 178.0,
        blood_pressure: "118/76".to_string(),
        bmi,
        steps_recommended: steps,
        timestamp: Utc.with_ymd_and_hms(2025, 3, day, 9, 30, 0).unwrap(),
    }
}

#[test]
fn given_no_records_when_summarizing_then_none() {
    assert_that!(DashboardSummary::from_records(&[]), none());
}

#[test]
fn given_records_when_summarizing_then_latest_bmi_is_last_inserted() {
    let records = vec![record(1, 24.1, 7000, 1), record(2, 23.4, 7000, 2)];

    let summary = DashboardSummary::from_records(&records).unwrap();

    assert_that!(summary.latest_bmi, eq(23.4));
    assert_that!(summary.total_records, eq(2));
}

#[test]
fn given_records_when_summarizing_then_avg_steps_truncates() {
    let records = vec![
        record(1, 22.0, 8800, 1),
        record(2, 22.0, 6500, 2),
        record(3, 22.0, 6500, 3),
    ];

    let summary = DashboardSummary::from_records(&records).unwrap();

    // 21800 / 3 = 7266.67
    assert_that!(summary.avg_steps, eq(7266));
}

#[test]
fn given_records_when_summarizing_then_last_entry_date_is_max_timestamp() {
    let records = vec![record(1, 22.0, 7000, 14), record(2, 22.0, 7000, 9)];

    let summary = DashboardSummary::from_records(&records).unwrap();

    assert_that!(
        summary.last_entry_date,
        eq(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    );
    assert_that!(summary.latest_bmi, eq(22.0));
}
