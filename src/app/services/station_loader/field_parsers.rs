//! Field parsing utilities for station CSV records
//!
//! Helper functions for pulling typed values out of a CSV record with
//! descriptive errors, plus the trace-aware precipitation parser.

use super::column_mapping::ColumnMapping;
use crate::app::models::Measurement;
use crate::{Error, Result};
use chrono::NaiveDate;
use csv::StringRecord;

/// Get a required, non-empty field value from a CSV record
pub fn get_required_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<&'a str> {
    get_optional_field(record, mapping, field_name).ok_or_else(|| {
        Error::data_validation(format!("Empty value for required column '{}'", field_name))
    })
}

/// Get an optional field value from a CSV record, treating blanks as missing
pub fn get_optional_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<&'a str> {
    mapping
        .get_index(field_name)
        .and_then(|index| record.get(index))
        .map(|s| s.trim().trim_matches('"').trim())
        .filter(|s| !s.is_empty())
}

/// Parse a required string field
pub fn parse_required_string(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<String> {
    get_required_field(record, mapping, field_name).map(str::to_string)
}

/// Parse a required floating point field
pub fn parse_required_f64(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<f64> {
    let value_str = get_required_field(record, mapping, field_name)?;
    parse_f64(value_str, field_name)
}

/// Parse a required date field, trying each format in order
///
/// Returns the date together with the index of the format that matched.
pub fn parse_required_date(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
    formats: &[String],
) -> Result<(NaiveDate, usize)> {
    let value_str = get_required_field(record, mapping, field_name)?;

    let mut last_error = None;
    for (index, format) in formats.iter().enumerate() {
        match NaiveDate::parse_from_str(value_str, format) {
            Ok(date) => return Ok((date, index)),
            Err(e) => last_error = Some(e),
        }
    }

    let message = format!(
        "Invalid date format for {}: '{}' (expected one of {})",
        field_name,
        value_str,
        formats.join(", ")
    );
    Err(match last_error {
        Some(source) => Error::datetime_parsing(message, source),
        None => Error::data_validation(message),
    })
}

/// Parse a precipitation-type field
///
/// The trace marker maps to [`Measurement::Trace`], as does any negative number.
/// An empty cell is an error unless `allow_missing` is set, in which case it is
/// [`Measurement::Absent`].
pub fn parse_measurement(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
    trace_marker: &str,
    allow_missing: bool,
) -> Result<Measurement> {
    match get_optional_field(record, mapping, field_name) {
        None if allow_missing => Ok(Measurement::Absent),
        None => Err(Error::data_validation(format!(
            "Empty value for required column '{}'",
            field_name
        ))),
        Some(value) if value.eq_ignore_ascii_case(trace_marker.trim()) => Ok(Measurement::Trace),
        Some(value) => parse_f64(value, field_name).map(Measurement::from_raw),
    }
}

fn parse_f64(value_str: &str, field_name: &str) -> Result<f64> {
    let value = value_str.parse::<f64>().map_err(|e| {
        Error::data_validation(format!(
            "Invalid number format for {}: '{}' ({})",
            field_name, value_str, e
        ))
    })?;

    if !value.is_finite() {
        return Err(Error::data_validation(format!(
            "Non-finite value for {}: '{}'",
            field_name, value_str
        )));
    }

    Ok(value)
}
