//! Data models for weather history processing
//!
//! This module contains the value types shared by station histories, regions and
//! the CSV loader: tagged precipitation measurements, the daily record and station
//! coordinates.

use crate::constants::{LATITUDE_RANGE, LONGITUDE_RANGE, TRACE_SENTINEL};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Precipitation Measurement
// =============================================================================

/// A precipitation-type measurement
///
/// Distinguishes "no data" from "trace" (fell, but too little to quantify) and
/// from a quantified amount, including an explicit zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    content = "amount",
    rename_all = "snake_case",
    try_from = "TaggedMeasurement"
)]
pub enum Measurement {
    /// Nothing was recorded
    Absent,
    /// Present but not quantifiable
    Trace,
    /// Quantified amount, never negative
    Value(f64),
}

impl Measurement {
    /// Interpret a raw numeric reading where any negative value marks a trace
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_nan() {
            Measurement::Absent
        } else if raw < 0.0 {
            Measurement::Trace
        } else {
            Measurement::Value(raw)
        }
    }

    /// Flatten back to a raw reading, with trace as `-1`
    pub fn raw(self) -> Option<f64> {
        match self {
            Measurement::Absent => None,
            Measurement::Trace => Some(TRACE_SENTINEL),
            Measurement::Value(amount) => Some(amount),
        }
    }

    /// The amount if it is strictly greater than zero
    ///
    /// Trace, zero and absent values are not measurable.
    pub fn measurable_amount(self) -> Option<f64> {
        match self {
            Measurement::Value(amount) if amount > 0.0 => Some(amount),
            _ => None,
        }
    }

    /// Check whether this measurement counts as measurable
    pub fn is_measurable(self) -> bool {
        self.measurable_amount().is_some()
    }

    pub fn is_trace(self) -> bool {
        matches!(self, Measurement::Trace)
    }
}

/// Wire form of [`Measurement`], checked before it becomes one
#[derive(Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
enum TaggedMeasurement {
    Absent,
    Trace,
    Value(f64),
}

impl TryFrom<TaggedMeasurement> for Measurement {
    type Error = Error;

    fn try_from(tagged: TaggedMeasurement) -> Result<Self> {
        match tagged {
            TaggedMeasurement::Absent => Ok(Measurement::Absent),
            TaggedMeasurement::Trace => Ok(Measurement::Trace),
            TaggedMeasurement::Value(amount) if amount.is_finite() && amount >= 0.0 => {
                Ok(Measurement::Value(amount))
            }
            TaggedMeasurement::Value(amount) => Err(Error::data_validation(format!(
                "Invalid measurement amount {}: must be finite and not negative",
                amount
            ))),
        }
    }
}

impl From<f64> for Measurement {
    fn from(raw: f64) -> Self {
        Measurement::from_raw(raw)
    }
}

impl From<Option<f64>> for Measurement {
    fn from(raw: Option<f64>) -> Self {
        raw.map_or(Measurement::Absent, Measurement::from_raw)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.raw() {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "n/a"),
        }
    }
}

// =============================================================================
// Daily Record
// =============================================================================

/// One station-day of measurements
///
/// Built once from a temperature triple `(avg, low, high)` and a precipitation
/// triple `(precipitation, rainfall, snowfall)`. No ordering between the three
/// temperatures is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Mean temperature for the day
    pub avg_temp: f64,

    /// Minimum temperature for the day
    pub low_temp: f64,

    /// Maximum temperature for the day
    pub high_temp: f64,

    /// Total precipitation (rain and snow combined)
    pub precipitation: Measurement,

    /// Rainfall component
    pub rainfall: Measurement,

    /// Snowfall component
    pub snowfall: Measurement,
}

impl DailyRecord {
    /// Create a record from raw readings; negative precipitation values are traces
    pub fn new(temperature: (f64, f64, f64), precipitation: (f64, f64, f64)) -> Self {
        let (total, rainfall, snowfall) = precipitation;

        Self::from_measurements(temperature, (total.into(), rainfall.into(), snowfall.into()))
    }

    /// Create a record from already-classified precipitation measurements
    pub fn from_measurements(
        temperature: (f64, f64, f64),
        precipitation: (Measurement, Measurement, Measurement),
    ) -> Self {
        let (avg_temp, low_temp, high_temp) = temperature;
        let (precipitation, rainfall, snowfall) = precipitation;

        Self {
            avg_temp,
            low_temp,
            high_temp,
            precipitation,
            rainfall,
            snowfall,
        }
    }

    /// Whether the day had measurable total precipitation
    pub fn has_measurable_precipitation(&self) -> bool {
        self.precipitation.is_measurable()
    }
}

impl fmt::Display for DailyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "temperature (avg {}, low {}, high {}), precipitation (total {}, rain {}, snow {})",
            self.avg_temp,
            self.low_temp,
            self.high_temp,
            self.precipitation,
            self.rainfall,
            self.snowfall
        )
    }
}

// =============================================================================
// Station Coordinates
// =============================================================================

/// Fixed station location in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates with range validation
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let coordinates = Self {
            latitude,
            longitude,
        };

        coordinates.validate()?;
        Ok(coordinates)
    }

    /// Validate latitude and longitude ranges
    pub fn validate(&self) -> Result<()> {
        if !LATITUDE_RANGE.contains(&self.latitude) {
            return Err(Error::data_validation(format!(
                "Invalid latitude {}: must be between -90 and 90 degrees",
                self.latitude
            )));
        }

        if !LONGITUDE_RANGE.contains(&self.longitude) {
            return Err(Error::data_validation(format!(
                "Invalid longitude {}: must be between -180 and 180 degrees",
                self.longitude
            )));
        }

        Ok(())
    }

    /// Get location as (latitude, longitude) tuple
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}
