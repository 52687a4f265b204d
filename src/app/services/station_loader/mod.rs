//! Station CSV loader for daily weather files
//!
//! This module turns delimited station files into [`StationHistory`] values and
//! directories of such files into a [`Region`].
//!
//! ## Architecture
//!
//! - [`loader`] - Single-file loading and row-level tolerance
//! - [`region_loader`] - Directory discovery and region assembly
//! - [`column_mapping`] - Header analysis by column name
//! - [`record_parser`] - Individual row parsing
//! - [`field_parsers`] - Typed field helpers, including trace markers
//! - [`stats`] - Loading statistics and result structures
//!
//! ## Usage
//!
//! ```no_run
//! use weather_history::app::services::station_loader::StationCsvLoader;
//!
//! # fn example() -> weather_history::Result<()> {
//! let loader = StationCsvLoader::default();
//! let result = loader.load_file(std::path::Path::new("york.csv"))?;
//!
//! match result.history {
//!     Some(history) => println!("{}: {} days", history.name(), history.len()),
//!     None => println!("no usable rows"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`StationHistory`]: crate::app::services::station_history::StationHistory
//! [`Region`]: crate::app::services::region::Region

pub mod column_mapping;
pub mod field_parsers;
pub mod loader;
pub mod record_parser;
pub mod region_loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use loader::StationCsvLoader;
pub use region_loader::RegionLoader;
pub use stats::{LoadResult, LoadStats, RegionLoadStats};
