//! Individual row parsing for station CSV files

use csv::StringRecord;

use super::column_mapping::ColumnMapping;
use super::field_parsers::{
    parse_measurement, parse_required_date, parse_required_f64, parse_required_string,
};
use crate::Result;
use crate::app::models::{Coordinates, DailyRecord};
use crate::config::LoaderConfig;
use crate::constants::columns;
use chrono::NaiveDate;

/// One well-formed input row
#[derive(Debug, Clone, PartialEq)]
pub struct StationRow {
    pub station: String,
    pub coordinates: Coordinates,
    pub date: NaiveDate,
    /// Index into the date formats of the format that parsed `date`
    pub date_format: usize,
    pub record: DailyRecord,
}

/// Parse and validate a single data row
///
/// Dates are tried against `date_formats` rather than the configured list, so a
/// caller can restrict a file to the format its first rows used.
pub fn parse_station_row(
    record: &StringRecord,
    mapping: &ColumnMapping,
    config: &LoaderConfig,
    date_formats: &[String],
) -> Result<StationRow> {
    let station = parse_required_string(record, mapping, columns::STATION)?;
    let latitude = parse_required_f64(record, mapping, columns::LATITUDE)?;
    let longitude = parse_required_f64(record, mapping, columns::LONGITUDE)?;
    let coordinates = Coordinates::new(latitude, longitude)?;
    let (date, date_format) = parse_required_date(record, mapping, columns::DATE, date_formats)?;

    let temperature = (
        parse_required_f64(record, mapping, columns::AVG_TEMP)?,
        parse_required_f64(record, mapping, columns::MIN_TEMP)?,
        parse_required_f64(record, mapping, columns::MAX_TEMP)?,
    );

    let measurement = |column: &str| {
        parse_measurement(
            record,
            mapping,
            column,
            &config.trace_marker,
            config.allow_missing_precipitation,
        )
    };
    let precipitation = (
        measurement(columns::PRECIPITATION)?,
        measurement(columns::RAINFALL)?,
        measurement(columns::SNOWFALL)?,
    );

    Ok(StationRow {
        station,
        coordinates,
        date,
        date_format,
        record: DailyRecord::from_measurements(temperature, precipitation),
    })
}
