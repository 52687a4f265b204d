//! Column mapping for station CSV headers
//!
//! Locates the required columns by name so input files may order their columns
//! freely. Header names are normalised (trimmed, unquoted, lower-cased) before
//! matching.

use crate::constants::columns;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Column name to index mapping for one input file
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Normalised column name to index mapping
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Analyze the header row and make sure every required column is present
    pub fn analyze(headers: &StringRecord) -> Result<Self> {
        let name_to_index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, header)| (normalise_header(header), index))
            .collect();

        let missing: Vec<&str> = columns::REQUIRED
            .iter()
            .copied()
            .filter(|column| !name_to_index.contains_key(*column))
            .collect();

        if !missing.is_empty() {
            return Err(Error::data_validation(format!(
                "Missing required columns: {}",
                missing.join(", ")
            )));
        }

        Ok(Self { name_to_index })
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }
}

fn normalise_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .trim()
        .trim_matches('"')
        .trim()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_case_and_whitespace_insensitive() {
        let headers = StringRecord::from(vec![
            "\u{feff}STATION", " Latitude ", "LONGITUDE", "\"DATE\"", "AVG_TEMP", "MIN_TEMP",
            "MAX_TEMP", "PRECIP", "RAIN", "SNOW",
        ]);

        let mapping = ColumnMapping::analyze(&headers).unwrap();
        assert_eq!(mapping.get_index(columns::STATION), Some(0));
        assert_eq!(mapping.get_index(columns::LATITUDE), Some(1));
        assert_eq!(mapping.get_index(columns::DATE), Some(3));
        assert_eq!(mapping.get_index(columns::SNOWFALL), Some(9));
    }

    #[test]
    fn test_analyze_reports_missing_columns() {
        let headers = StringRecord::from(vec!["STATION", "DATE", "AVG_TEMP"]);

        let error = ColumnMapping::analyze(&headers).unwrap_err().to_string();
        assert!(error.contains("latitude"));
        assert!(error.contains("snow"));
        assert!(!error.contains("avg_temp"));
    }
}
