//! Loading statistics and result structures for station CSV files

use crate::app::services::station_history::StationHistory;
use serde::Serialize;

/// Result of loading one station file
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// The station history, or `None` when the file held no well-formed rows
    pub history: Option<StationHistory>,

    /// Row-level statistics
    pub stats: LoadStats,
}

/// Row-level loading statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadStats {
    /// Total number of data rows encountered
    pub total_rows: usize,

    /// Rows that produced a daily record
    pub rows_loaded: usize,

    /// Rows skipped as ill-formed
    pub rows_skipped: usize,

    /// Loaded rows that replaced an earlier row for the same date
    pub dates_overwritten: usize,

    /// Trace values seen in loaded rows
    pub trace_values: usize,

    /// Messages describing skipped rows
    pub errors: Vec<String>,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of rows that loaded successfully
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.rows_loaded as f64 / self.total_rows as f64) * 100.0
        }
    }

    pub(crate) fn record_skip(&mut self, message: String) {
        self.rows_skipped += 1;
        self.errors.push(message);
    }
}

/// Statistics for loading a whole region directory
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionLoadStats {
    /// Files matching the discovery pattern
    pub files_found: usize,

    /// Files that produced a station history
    pub files_loaded: usize,

    /// Files with no well-formed rows
    pub files_without_data: usize,

    /// Files that could not be read
    pub files_failed: usize,

    /// Histories rejected because the station name was already present
    pub duplicate_stations: usize,

    /// Rows loaded across all files
    pub rows_loaded: usize,

    /// Rows skipped across all files
    pub rows_skipped: usize,
}

impl RegionLoadStats {
    /// Fold one file's outcome into the totals
    pub fn absorb(&mut self, stats: &LoadStats) {
        self.rows_loaded += stats.rows_loaded;
        self.rows_skipped += stats.rows_skipped;
    }
}
