//! Shared test utilities and fixtures for region tests

use crate::app::models::{Coordinates, DailyRecord};
use crate::app::services::station_history::StationHistory;
use chrono::NaiveDate;

pub mod region_tests;

/// Create an empty station history at the given coordinates
pub fn create_test_history(name: &str, lat: f64, lon: f64) -> StationHistory {
    StationHistory::new(name, Coordinates::new(lat, lon).unwrap()).unwrap()
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Record with the given precipitation triple `(total, rain, snow)`
pub fn precipitation(total: f64, rain: f64, snow: f64) -> DailyRecord {
    DailyRecord::new((10.0, 10.0, 10.0), (total, rain, snow))
}

pub const SAMPLE_1: &str = "Test Sample 1";
pub const SAMPLE_2: &str = "Test Sample 2";

/// Region holding two empty stations
pub fn create_two_station_region() -> crate::app::services::region::Region {
    let mut region = crate::app::services::region::Region::new("Test");
    region.add_history(create_test_history(SAMPLE_1, 10.0, 20.0));
    region.add_history(create_test_history(SAMPLE_2, 15.0, 20.0));
    region
}
