//! Tests for directory discovery and region assembly

use super::*;
use crate::app::services::station_loader::RegionLoader;
use crate::config::Config;
use std::fs;
use tempfile::TempDir;

fn create_region_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    write_station_file(dir, "a_york.csv", &single_row_file("YORK", 43.7735, 79.5019, 3.0, 1.0))
        .unwrap();
    write_station_file(dir, "b_banff.csv", &single_row_file("BANFF", 51.17, 115.57, 1.0, 3.0))
        .unwrap();
    // Duplicate station name in a later file
    write_station_file(dir, "c_york.csv", &single_row_file("YORK", 10.0, 10.0, 0.0, 9.0)).unwrap();
    write_station_file(dir, "d_empty.csv", "").unwrap();
    write_station_file(dir, "notes.txt", "not a station file").unwrap();

    let nested = dir.join("nested");
    fs::create_dir_all(&nested).unwrap();
    write_station_file(&nested, "jasper.csv", &single_row_file("JASPER", 52.88, 118.08, 0.0, 5.0))
        .unwrap();

    temp_dir
}

#[test]
fn test_discover_files_non_recursive() {
    let temp_dir = create_region_dir();
    let loader = RegionLoader::new(Config::default()).unwrap();

    let files = loader.discover_files(temp_dir.path()).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a_york.csv", "b_banff.csv", "c_york.csv", "d_empty.csv"]);
}

#[test]
fn test_discover_files_recursive() {
    let temp_dir = create_region_dir();
    let mut config = Config::default();
    config.discovery.recursive = true;
    let loader = RegionLoader::new(config).unwrap();

    let files = loader.discover_files(temp_dir.path()).unwrap();
    assert_eq!(files.len(), 5);
    assert!(files.iter().any(|p| p.ends_with("nested/jasper.csv")));
}

#[test]
fn test_discover_files_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let loader = RegionLoader::new(Config::default()).unwrap();

    let result = loader.discover_files(&temp_dir.path().join("nope"));
    assert!(matches!(result, Err(crate::Error::FileNotFound { .. })));
}

#[test]
fn test_load_directory_first_file_wins() {
    let temp_dir = create_region_dir();
    let loader = RegionLoader::new(Config::default()).unwrap();

    let (region, stats) = loader.load_directory(temp_dir.path(), "Canada").unwrap();

    assert_eq!(region.name, "Canada");
    assert_eq!(region.station_names(), vec!["BANFF", "YORK"]);
    assert_eq!(
        region.retrieve_history("YORK").unwrap().coordinates.as_tuple(),
        (43.7735, 79.5019)
    );

    assert_eq!(stats.files_found, 4);
    assert_eq!(stats.files_loaded, 2);
    assert_eq!(stats.duplicate_stations, 1);
    assert_eq!(stats.files_without_data, 1);
    assert_eq!(stats.files_failed, 0);
    assert_eq!(stats.rows_loaded, 3);

    let (name, fraction) = region.snowiest_location().unwrap();
    assert_eq!(name, "BANFF");
    assert_eq!(fraction, 0.75);
}

#[test]
fn test_load_files_reports_progress_and_failures() {
    let temp_dir = create_region_dir();
    let loader = RegionLoader::new(Config::default()).unwrap();
    let files = vec![
        temp_dir.path().join("a_york.csv"),
        temp_dir.path().join("vanished.csv"),
    ];

    let mut visited = 0;
    let (region, stats) = loader.load_files(&files, "Test", |_| visited += 1);

    assert_eq!(visited, 2);
    assert_eq!(region.len(), 1);
    assert_eq!(stats.files_failed, 1);
}

#[test]
fn test_invalid_config_rejected() {
    let mut config = Config::default();
    config.discovery.file_pattern = "[".to_string();

    assert!(RegionLoader::new(config).is_err());
}
