//! Shared test utilities and fixtures for station history tests

use crate::app::models::{Coordinates, DailyRecord};
use crate::app::services::station_history::StationHistory;
use chrono::NaiveDate;


/// Create an empty history at a fixed test location
pub fn create_test_history(name: &str) -> StationHistory {
    StationHistory::new(name, Coordinates::new(10.0, 20.0).unwrap()).unwrap()
}

/// Shorthand for a calendar date
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Record with trace amounts for all precipitation fields
pub fn trace_record() -> DailyRecord {
    DailyRecord::new((10.0, 10.0, 30.0), (-1.0, -1.0, -1.0))
}

/// Record with measurable precipitation (10 total, 10 rain, 30 snow)
pub fn wet_record() -> DailyRecord {
    DailyRecord::new((100.0, 100.0, 300.0), (10.0, 10.0, 30.0))
}

/// Record with zero precipitation in every field
pub fn dry_record() -> DailyRecord {
    DailyRecord::new((1000.0, 1000.0, 3000.0), (0.0, 0.0, 0.0))
}

/// Fixed anchor date so tests never depend on the wall clock
pub const ANCHOR: (i32, u32, u32) = (2021, 6, 15);

pub fn anchor_date() -> NaiveDate {
    ymd(ANCHOR.0, ANCHOR.1, ANCHOR.2)
}
