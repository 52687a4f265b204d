//! Aggregate queries over a station history
//!
//! Record highs, monthly means, the longest run of measurable precipitation and
//! the snowfall fraction. Every query works only on the stored dates, never on
//! the current date.

use super::StationHistory;
use crate::constants::MONTH_ABBREVIATIONS;
use chrono::{Datelike, Days, NaiveDate};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Mean daily temperature for each calendar month across all years
///
/// Always holds all twelve months; a month without records is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyAverages {
    averages: [Option<f64>; 12],
}

impl MonthlyAverages {
    /// Average for a month numbered 1-12
    pub fn get(&self, month: u32) -> Option<f64> {
        let index = month.checked_sub(1)? as usize;
        self.averages.get(index).copied().flatten()
    }

    /// Average for a three-letter month abbreviation such as `"Jan"`
    pub fn by_abbreviation(&self, abbreviation: &str) -> Option<f64> {
        MONTH_ABBREVIATIONS
            .iter()
            .position(|month| month.eq_ignore_ascii_case(abbreviation))
            .and_then(|index| self.averages[index])
    }

    /// Iterate over `(abbreviation, average)` pairs from January to December
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<f64>)> + '_ {
        MONTH_ABBREVIATIONS
            .iter()
            .copied()
            .zip(self.averages.iter().copied())
    }

    /// Number of months with at least one record
    pub fn months_with_data(&self) -> usize {
        self.averages.iter().filter(|average| average.is_some()).count()
    }
}

impl Serialize for MonthlyAverages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(MONTH_ABBREVIATIONS.len()))?;
        for (month, average) in self.iter() {
            map.serialize_entry(month, &average)?;
        }
        map.end()
    }
}

/// Longest run of consecutive days with measurable precipitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrecipitationStreak {
    /// First day of the run
    pub start: NaiveDate,

    /// Number of consecutive days in the run
    pub length: usize,
}

impl PrecipitationStreak {
    /// Last day of the run
    pub fn end(&self) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(self.length.saturating_sub(1) as u64))
            .unwrap_or(NaiveDate::MAX)
    }
}

impl StationHistory {
    /// Highest `high_temp` recorded on a month/day across every year
    pub fn record_high(&self, month: u32, day: u32) -> Option<f64> {
        self.records()
            .filter(|(date, _)| date.month() == month && date.day() == day)
            .map(|(_, record)| record.high_temp)
            .reduce(f64::max)
    }

    /// Mean `avg_temp` per calendar month across all years
    pub fn monthly_average(&self) -> MonthlyAverages {
        let mut sums = [0.0_f64; 12];
        let mut counts = [0_usize; 12];

        for (date, record) in self.records() {
            let index = date.month0() as usize;
            sums[index] += record.avg_temp;
            counts[index] += 1;
        }

        let mut averages = [None; 12];
        for (index, average) in averages.iter_mut().enumerate() {
            if counts[index] > 0 {
                *average = Some(sums[index] / counts[index] as f64);
            }
        }

        MonthlyAverages { averages }
    }

    /// Longest streak of calendar-consecutive days with measurable precipitation
    ///
    /// Trace and zero precipitation break a streak, as does any date without a
    /// record. When several streaks share the maximum length the earliest is
    /// returned. `None` if no day had measurable precipitation.
    pub fn contiguous_precipitation(&self) -> Option<PrecipitationStreak> {
        let mut wet_days: Vec<NaiveDate> = self
            .records()
            .filter(|(_, record)| record.has_measurable_precipitation())
            .map(|(date, _)| *date)
            .collect();
        wet_days.sort_unstable();

        let mut best: Option<PrecipitationStreak> = None;
        let mut current: Option<PrecipitationStreak> = None;
        let mut previous: Option<NaiveDate> = None;

        for date in wet_days {
            let continues = previous.and_then(|day| day.succ_opt()) == Some(date);
            let streak = match current {
                Some(streak) if continues => PrecipitationStreak {
                    start: streak.start,
                    length: streak.length + 1,
                },
                _ => PrecipitationStreak {
                    start: date,
                    length: 1,
                },
            };

            if best.is_none_or(|longest| streak.length > longest.length) {
                best = Some(streak);
            }
            current = Some(streak);
            previous = Some(date);
        }

        best
    }

    /// Fraction of measurable precipitation that fell as snow
    ///
    /// Only snowfall and rainfall values strictly above zero contribute; trace
    /// amounts are left out of both sums. Returns `0.0` when nothing measurable
    /// fell at all.
    pub fn percentage_snowfall(&self) -> f64 {
        let (snow, rain) = self
            .records()
            .fold((0.0_f64, 0.0_f64), |(snow, rain), (_, record)| {
                (
                    snow + record.snowfall.measurable_amount().unwrap_or(0.0),
                    rain + record.rainfall.measurable_amount().unwrap_or(0.0),
                )
            });

        let total = snow + rain;
        if total > 0.0 { snow / total } else { 0.0 }
    }
}
