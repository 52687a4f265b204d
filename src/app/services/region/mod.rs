//! Region service grouping station histories by name
//!
//! A [`Region`] (typically a country) owns the [`StationHistory`] of each of its
//! stations, indexed by station name for O(1) lookups. The first history added
//! under a name is kept; later histories with the same name are rejected so a
//! duplicate ingestion cannot clobber data already loaded.

use crate::app::services::station_history::StationHistory;
use std::collections::HashMap;
use tracing::debug;

pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use summary::{RegionSummary, StationSummary};

/// Named collection of station histories
#[derive(Debug, Clone, Default)]
pub struct Region {
    /// Region name, e.g. a country
    pub name: String,

    /// Station histories indexed by station name
    stations: HashMap<String, StationHistory>,
}

impl Region {
    /// Create an empty region
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stations: HashMap::new(),
        }
    }

    /// Add a history under its station name unless that name is already taken
    ///
    /// Returns `true` if the history was inserted.
    pub fn add_history(&mut self, history: StationHistory) -> bool {
        if self.stations.contains_key(history.name()) {
            debug!(
                "Region '{}' already has station '{}', keeping the first history",
                self.name,
                history.name()
            );
            return false;
        }

        self.stations.insert(history.name().to_string(), history);
        true
    }

    /// Get the history for a station name
    pub fn retrieve_history(&self, name: &str) -> Option<&StationHistory> {
        self.stations.get(name)
    }

    /// Get mutable access to a station history, e.g. to keep adding weather
    pub fn retrieve_history_mut(&mut self, name: &str) -> Option<&mut StationHistory> {
        self.stations.get_mut(name)
    }

    /// Station with the highest snowfall fraction and that fraction
    ///
    /// `None` when the region has no stations. Ties resolve to any one of the
    /// stations sharing the maximum.
    pub fn snowiest_location(&self) -> Option<(&str, f64)> {
        self.stations
            .values()
            .map(|history| (history.name(), history.percentage_snowfall()))
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    /// Number of stations in the region
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Station names in ascending order
    pub fn station_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.stations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over station histories in no particular order
    pub fn histories(&self) -> impl Iterator<Item = &StationHistory> {
        self.stations.values()
    }
}
