mod dashboard_summary;
mod gender;
