//! Shared test utilities and fixtures for station loader tests

use std::fs;
use std::path::Path;

pub mod region_loader_tests;

pub const HEADER: &str = "STATION,LATITUDE,LONGITUDE,DATE,AVG_TEMP,MIN_TEMP,MAX_TEMP,PRECIP,RAIN,SNOW";

/// Single well-formed York row
pub const YORK_ROW: &str = "YORK,43.7735,79.5019,12/25/2019,7.3,-2.1,13.6,25.3,0.0,25.1";

/// York file with ill-formed rows mixed in
pub fn york_mixed_content() -> String {
    [
        HEADER,
        "YORK,43.7735,79.5019,not-a-date,7.3,-2.1,13.6,25.3,0.0,25.1",
        "YORK,43.7735,,12/24/2019,7.3,-2.1,13.6,25.3,0.0,25.1",
        YORK_ROW,
        "YORK,43.7735,79.5019,12/26/2019,abc,-2.1,13.6,25.3,0.0,25.1",
        "YORK,43.7735,79.5019,12/27/2019,1.0,-2.0",
    ]
    .join("\n")
}

/// Thunder Bay file with trace markers
pub fn thunder_bay_trace_content() -> String {
    [
        HEADER,
        "THUNDER BAY,48.3809,89.2477,01/01/2020,-12.1,-20.3,-5.0,T,0.0,T",
        "THUNDER BAY,48.3809,89.2477,01/02/2020,-10.0,-15.5,-4.2,1.2,t,1.2",
        "THUNDER BAY,48.3809,89.2477,01/03/2020,-8.5,-11.0,-2.0,3.4,3.4,0.0",
    ]
    .join("\n")
}

/// Write a CSV fixture into a directory
pub fn write_station_file(dir: &Path, filename: &str, content: &str) -> std::io::Result<()> {
    fs::write(dir.join(filename), content)
}

/// Single-row file for a named station
pub fn single_row_file(station: &str, lat: f64, lon: f64, rain: f64, snow: f64) -> String {
    format!(
        "{}\n{},{},{},2020-01-15,1.0,-1.0,3.0,{},{},{}",
        HEADER,
        station,
        lat,
        lon,
        rain + snow,
        rain,
        snow
    )
}
