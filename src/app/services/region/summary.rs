//! Region summary report
//!
//! Collects the per-station aggregates of a region into one serializable
//! structure used by the CLI report formats.

use super::Region;
use crate::app::services::station_history::{PrecipitationStreak, StationHistory};
use chrono::NaiveDate;
use serde::Serialize;

/// Aggregates for a single station
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSummary {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub record_count: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub snowfall_fraction: f64,
    pub longest_streak: Option<PrecipitationStreak>,
}

impl StationSummary {
    /// Compute the summary for one station history
    pub fn from_history(history: &StationHistory) -> Self {
        let (first_date, last_date) = history.date_range().unzip();

        Self {
            name: history.name().to_string(),
            latitude: history.coordinates.latitude,
            longitude: history.coordinates.longitude,
            record_count: history.len(),
            first_date,
            last_date,
            snowfall_fraction: history.percentage_snowfall(),
            longest_streak: history.contiguous_precipitation(),
        }
    }
}

/// Report over every station in a region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSummary {
    pub region: String,
    pub station_count: usize,
    pub total_records: usize,
    /// Station with the highest snowfall fraction
    pub snowiest: Option<(String, f64)>,
    /// Per-station summaries sorted by station name
    pub stations: Vec<StationSummary>,
}

impl Region {
    /// Summarise every station in the region
    pub fn generate_summary(&self) -> RegionSummary {
        let mut stations: Vec<StationSummary> =
            self.histories().map(StationSummary::from_history).collect();
        stations.sort_by(|a, b| a.name.cmp(&b.name));

        RegionSummary {
            region: self.name.clone(),
            station_count: stations.len(),
            total_records: stations.iter().map(|s| s.record_count).sum(),
            snowiest: self
                .snowiest_location()
                .map(|(name, fraction)| (name.to_string(), fraction)),
            stations,
        }
    }
}
