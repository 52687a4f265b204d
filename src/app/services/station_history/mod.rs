//! Station history service holding one station's daily records
//!
//! A [`StationHistory`] owns every [`DailyRecord`] reported by a single station,
//! indexed by calendar date. Re-adding a date replaces the stored record: the
//! latest write always wins and records are never merged.

use crate::app::models::{Coordinates, DailyRecord};
use crate::{Error, Result};
use chrono::NaiveDate;
use std::collections::HashMap;

pub mod aggregates;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use aggregates::{MonthlyAverages, PrecipitationStreak};

/// All daily records for one weather station
#[derive(Debug, Clone, PartialEq)]
pub struct StationHistory {
    /// Station name, fixed at construction
    name: String,

    /// Station location, fixed at construction
    pub coordinates: Coordinates,

    /// Daily records indexed by date
    records: HashMap<NaiveDate, DailyRecord>,
}

impl StationHistory {
    /// Create an empty history for a station
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(Error::data_validation(
                "Station name cannot be empty".to_string(),
            ));
        }
        coordinates.validate()?;

        Ok(Self {
            name,
            coordinates,
            records: HashMap::new(),
        })
    }

    /// Station name (not required to be unique across regions)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store the record for `date`, replacing any earlier record for that date
    pub fn add_weather(&mut self, date: NaiveDate, record: DailyRecord) {
        self.records.insert(date, record);
    }

    /// Get the record stored for `date`
    pub fn retrieve_weather(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.records.get(&date)
    }

    /// Number of dates with a stored record
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All recorded dates in ascending order
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.records.keys().copied().collect();
        dates.sort_unstable();
        dates
    }

    /// Earliest and latest recorded dates
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.keys().min()?;
        let last = self.records.keys().max()?;
        Some((*first, *last))
    }

    /// Iterate over stored records in no particular order
    pub(crate) fn records(&self) -> impl Iterator<Item = (&NaiveDate, &DailyRecord)> {
        self.records.iter()
    }
}
