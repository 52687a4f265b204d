//! Command-line argument definitions for the weather history tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::Config;
use crate::constants::DEFAULT_REGION_NAME;
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the weather history tool
///
/// Loads daily weather observations per station and reports record highs,
/// monthly averages, precipitation streaks and snowfall fractions.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "weather-history",
    version,
    about = "Summarise daily weather station histories",
    long_about = "Loads daily weather observations for weather stations from CSV files and \
                  reports per-station aggregates (record highs, monthly average temperatures, \
                  longest precipitation streaks, snowfall fractions) and the snowiest station \
                  of a region."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and hides progress bars.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file for loader and discovery settings. If not
    /// specified, looks for <config dir>/weather-history/config.toml
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load a directory of station files and summarise the region
    Summary(SummaryArgs),
    /// Load a single station file and report its aggregates
    Station(StationArgs),
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    /// Directory holding one CSV file per station
    #[arg(value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Region name used in the report
    #[arg(
        long = "region",
        value_name = "NAME",
        default_value = DEFAULT_REGION_NAME,
        help = "Name of the region, e.g. a country"
    )]
    pub region: String,

    /// Descend into subdirectories when discovering station files
    #[arg(long = "recursive", help = "Search subdirectories for station files")]
    pub recursive: bool,

    /// Glob pattern for station file names
    #[arg(
        long = "pattern",
        value_name = "GLOB",
        help = "File name pattern for station files [default: *.csv]"
    )]
    pub file_pattern: Option<String>,

    /// Cell text marking a trace amount
    #[arg(long = "trace-marker", value_name = "TEXT")]
    pub trace_marker: Option<String>,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the region report"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the station command
#[derive(Debug, Clone, Parser)]
pub struct StationArgs {
    /// CSV file with the daily records of one station
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Also report the record high for this calendar day
    #[arg(
        long = "record-high",
        value_name = "MM-DD",
        help = "Report the highest temperature ever recorded on this month and day"
    )]
    pub record_high: Option<MonthDay>,

    /// Cell text marking a trace amount
    #[arg(long = "trace-marker", value_name = "TEXT")]
    pub trace_marker: Option<String>,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the station report"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Calendar day without a year, parsed from `MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl FromStr for MonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::data_validation(format!("Invalid day '{}', expected MM-DD", s));

        let (month, day) = s.trim().split_once('-').ok_or_else(invalid)?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;

        // Leap year so that 02-29 is accepted
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(invalid());
        }

        Ok(MonthDay { month, day })
    }
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl SummaryArgs {
    /// Validate the summary command arguments
    pub fn validate(&self) -> Result<()> {
        if !self.input_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is not a directory: {}",
                self.input_dir.display()
            )));
        }

        if self.region.trim().is_empty() {
            return Err(Error::configuration("Region name cannot be empty"));
        }

        Ok(())
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.recursive {
            config.discovery.recursive = true;
        }
        if let Some(pattern) = &self.file_pattern {
            config.discovery.file_pattern = pattern.clone();
        }
        if let Some(marker) = &self.trace_marker {
            config.loader.trace_marker = marker.clone();
        }
    }
}

impl StationArgs {
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(marker) = &self.trace_marker {
            config.loader.trace_marker = marker.clone();
        }
    }
}
