//! Station CSV loader
//!
//! Reads one delimited file and builds the [`StationHistory`] it describes.
//! Ill-formed rows are skipped and counted; a file without a single usable row
//! yields no history rather than an error. The first loaded row fixes the date
//! format for the rest of the file, so `03/04/2020` and `13/04/2020` cannot be
//! read with different day/month orders.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::record_parser::parse_station_row;
use super::stats::{LoadResult, LoadStats};
use crate::app::services::station_history::StationHistory;
use crate::config::LoaderConfig;
use crate::{Error, Result};

/// Loader turning station CSV files into station histories
#[derive(Debug, Clone, Default)]
pub struct StationCsvLoader {
    config: LoaderConfig,
}

impl StationCsvLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a station history from a file on disk
    pub fn load_file(&self, file_path: &Path) -> Result<LoadResult> {
        info!("Loading station file: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let file = File::open(file_path).map_err(|e| {
            Error::io(format!("Failed to open file {}", file_path.display()), e)
        })?;

        self.load_reader(file, &file_path.display().to_string())
    }

    /// Load a station history from any reader; `source` names it in messages
    pub fn load_reader<R: Read>(&self, reader: R, source: &str) -> Result<LoadResult> {
        let mut stats = LoadStats::new();

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.config.delimiter_byte()?)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::csv_parsing(source, "Failed to read CSV headers", Some(e)))?
            .clone();

        if headers.iter().all(|header| header.trim().is_empty()) {
            warn!("No data in {}: file is empty", source);
            return Ok(LoadResult {
                history: None,
                stats,
            });
        }

        let mapping = match ColumnMapping::analyze(&headers) {
            Ok(mapping) => mapping,
            Err(e) => {
                warn!("No data in {}: {}", source, e);
                stats.errors.push(e.to_string());
                return Ok(LoadResult {
                    history: None,
                    stats,
                });
            }
        };

        let mut history: Option<StationHistory> = None;
        // Narrowed to a single format once a row has been loaded
        let mut date_formats: &[String] = &self.config.date_formats;

        for result in csv_reader.records() {
            stats.total_rows += 1;
            let row_number = stats.total_rows;

            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => {
                    return Err(Error::csv_parsing(
                        source,
                        format!("Read failed at row {}", row_number),
                        Some(e),
                    ));
                }
                Err(e) => {
                    debug!("Skipped row {} in {}: {}", row_number, source, e);
                    stats.record_skip(format!("CSV parse error at row {}: {}", row_number, e));
                    continue;
                }
            };

            let row = match parse_station_row(&record, &mapping, &self.config, date_formats) {
                Ok(row) => row,
                Err(e) => {
                    debug!("Skipped row {} in {}: {}", row_number, source, e);
                    stats.record_skip(format!("Row {}: {}", row_number, e));
                    continue;
                }
            };

            if history.is_none() {
                match StationHistory::new(row.station.clone(), row.coordinates) {
                    Ok(station) => history = Some(station),
                    Err(e) => {
                        stats.record_skip(format!("Row {}: {}", row_number, e));
                        continue;
                    }
                }
            }
            let Some(station) = history.as_mut() else {
                continue;
            };

            if station.name() != row.station {
                debug!(
                    "Skipped row {} in {}: station '{}' differs from '{}'",
                    row_number, source, row.station, station.name()
                );
                stats.record_skip(format!(
                    "Row {}: station '{}' does not match file station '{}'",
                    row_number, row.station, station.name()
                ));
                continue;
            }

            if station.retrieve_weather(row.date).is_some() {
                stats.dates_overwritten += 1;
            }
            stats.trace_values += [
                row.record.precipitation,
                row.record.rainfall,
                row.record.snowfall,
            ]
            .iter()
            .filter(|measurement| measurement.is_trace())
            .count();

            if date_formats.len() > 1 {
                date_formats = &date_formats[row.date_format..=row.date_format];
                debug!(
                    "Using date format '{}' for the rest of {}",
                    date_formats[0], source
                );
            }

            station.add_weather(row.date, row.record);
            stats.rows_loaded += 1;
        }

        match &history {
            Some(station) => info!(
                "Loaded {} rows for station '{}' from {} ({} skipped)",
                stats.rows_loaded, station.name(), source, stats.rows_skipped
            ),
            None => warn!(
                "No data in {}: {} rows, none well-formed",
                source, stats.total_rows
            ),
        }

        Ok(LoadResult { history, stats })
    }
}
