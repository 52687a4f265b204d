//! Tests for region insertion, lookup and the snowiest-location query

use super::*;
use crate::app::services::region::Region;

fn add(region: &mut Region, station: &str, date: NaiveDate, record: DailyRecord) {
    region
        .retrieve_history_mut(station)
        .unwrap()
        .add_weather(date, record);
}

#[test]
fn test_new_region_is_empty() {
    let region = Region::new("Test");

    assert_eq!(region.name, "Test");
    assert!(region.is_empty());
    assert!(region.station_names().is_empty());
}

#[test]
fn test_add_history_first_write_wins() {
    let mut region = Region::new("Test");

    assert!(region.add_history(create_test_history(SAMPLE_1, 10.0, 20.0)));
    let stored = region.retrieve_history(SAMPLE_1).unwrap();
    assert_eq!(stored.name(), SAMPLE_1);
    assert_eq!(stored.coordinates.as_tuple(), (10.0, 20.0));

    assert!(!region.add_history(create_test_history(SAMPLE_1, 20.0, 30.0)));
    let stored = region.retrieve_history(SAMPLE_1).unwrap();
    assert_eq!(stored.coordinates.as_tuple(), (10.0, 20.0));
    assert_eq!(region.len(), 1);
}

#[test]
fn test_duplicate_keeps_first_records() {
    let mut region = Region::new("Test");
    let mut first = create_test_history(SAMPLE_1, 10.0, 20.0);
    first.add_weather(ymd(2020, 1, 1), precipitation(1.0, 0.0, 1.0));
    let mut second = create_test_history(SAMPLE_1, 10.0, 20.0);
    second.add_weather(ymd(2020, 1, 2), precipitation(1.0, 1.0, 0.0));

    region.add_history(first);
    region.add_history(second);

    let stored = region.retrieve_history(SAMPLE_1).unwrap();
    assert_eq!(stored.len(), 1);
    assert!(stored.retrieve_weather(ymd(2020, 1, 1)).is_some());
    assert!(stored.retrieve_weather(ymd(2020, 1, 2)).is_none());
}

#[test]
fn test_retrieve_missing_history() {
    let region = Region::new("Test");
    assert!(region.retrieve_history("Test").is_none());
}

#[test]
fn test_station_names_sorted() {
    let mut region = Region::new("Test");
    region.add_history(create_test_history("ZETA", 0.0, 0.0));
    region.add_history(create_test_history("ALPHA", 0.0, 0.0));

    assert_eq!(region.station_names(), vec!["ALPHA", "ZETA"]);
}

#[test]
fn test_snowiest_location_empty_region() {
    let region = Region::new("Test");
    assert_eq!(region.snowiest_location(), None);
}

#[test]
fn test_snowiest_location_single_station() {
    let mut region = Region::new("Test");
    region.add_history(create_test_history(SAMPLE_1, 10.0, 20.0));
    add(&mut region, SAMPLE_1, ymd(2021, 6, 15), precipitation(1.0, 1.0, -1.0));

    assert_eq!(region.snowiest_location(), Some((SAMPLE_1, 0.0)));
}

#[test]
fn test_snowiest_location_tie_returns_either() {
    let mut region = create_two_station_region();
    add(&mut region, SAMPLE_1, ymd(2021, 6, 15), precipitation(1.0, 1.0, -1.0));
    add(&mut region, SAMPLE_2, ymd(2021, 6, 15), precipitation(1.0, 1.0, -1.0));

    let result = region.snowiest_location();
    assert!(result == Some((SAMPLE_1, 0.0)) || result == Some((SAMPLE_2, 0.0)));
}

#[test]
fn test_snowiest_location_picks_snowiest() {
    let mut region = create_two_station_region();
    add(&mut region, SAMPLE_1, ymd(2021, 6, 15), precipitation(1.0, 1.0, 0.0));
    add(&mut region, SAMPLE_2, ymd(2021, 6, 15), precipitation(1.0, 0.0, 1.0));

    assert_eq!(region.snowiest_location(), Some((SAMPLE_2, 1.0)));
}

#[test]
fn test_snowiest_location_handles_trace() {
    let mut region = create_two_station_region();
    add(&mut region, SAMPLE_1, ymd(2021, 6, 15), precipitation(1.0, 0.0, 1.0));
    add(&mut region, SAMPLE_2, ymd(2021, 6, 15), precipitation(1.0, -1.0, 1.0));

    let result = region.snowiest_location();
    assert!(result == Some((SAMPLE_1, 1.0)) || result == Some((SAMPLE_2, 1.0)));
}

#[test]
fn test_snowiest_location_accumulates_station_records() {
    let mut region = create_two_station_region();
    add(&mut region, SAMPLE_1, ymd(2021, 6, 15), precipitation(1.0, 1.0, 0.0));
    add(&mut region, SAMPLE_2, ymd(2021, 6, 15), precipitation(1.0, 10.0, 20.0));
    add(&mut region, SAMPLE_2, ymd(2021, 6, 16), precipitation(1.0, 50.0, 20.0));

    assert_eq!(region.snowiest_location(), Some((SAMPLE_2, 0.4)));
}

#[test]
fn test_snowiest_location_full_snow_beats_partial() {
    let mut region = create_two_station_region();
    add(&mut region, SAMPLE_1, ymd(2021, 6, 15), precipitation(1.0, 0.0, 1.0));
    add(&mut region, SAMPLE_2, ymd(2021, 6, 15), precipitation(1.0, 10.0, 20.0));
    add(&mut region, SAMPLE_2, ymd(2021, 6, 16), precipitation(1.0, 50.0, 20.0));

    assert_eq!(region.snowiest_location(), Some((SAMPLE_1, 1.0)));
}

#[test]
fn test_snowiest_location_station_without_records() {
    let region = create_two_station_region();

    let (_, fraction) = region.snowiest_location().unwrap();
    assert_eq!(fraction, 0.0);
}

#[test]
fn test_mutable_access_keeps_station_key() {
    let mut region = Region::new("Test");
    region.add_history(create_test_history(SAMPLE_1, 10.0, 20.0));

    let history = region.retrieve_history_mut(SAMPLE_1).unwrap();
    history.add_weather(ymd(2021, 1, 1), precipitation(1.0, 0.0, 1.0));
    assert_eq!(history.name(), SAMPLE_1);

    // The stored history is still found under its name and still blocks duplicates
    assert_eq!(region.retrieve_history(SAMPLE_1).unwrap().len(), 1);
    assert!(!region.add_history(create_test_history(SAMPLE_1, 0.0, 0.0)));
    assert!(region.retrieve_history(SAMPLE_2).is_none());
    assert_eq!(region.station_names(), vec![SAMPLE_1]);
}
