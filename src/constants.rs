//! Application constants for the weather history tool
//!
//! Column names, default loader settings and calendar lookups shared by the
//! data model, the CSV loader and the CLI.

// =============================================================================
// Calendar
// =============================================================================

/// Three-letter month abbreviations, indexed by `month0`
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// =============================================================================
// Trace Amounts
// =============================================================================

/// Raw numeric value used for a trace amount when a measurement is flattened
pub const TRACE_SENTINEL: f64 = -1.0;

/// Default textual marker for a trace amount in input files
pub const DEFAULT_TRACE_MARKER: &str = "T";

// =============================================================================
// Input File Layout
// =============================================================================

/// Column headers expected in station CSV files (matched case-insensitively)
pub mod columns {
    pub const STATION: &str = "station";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const DATE: &str = "date";
    pub const AVG_TEMP: &str = "avg_temp";
    pub const MIN_TEMP: &str = "min_temp";
    pub const MAX_TEMP: &str = "max_temp";
    pub const PRECIPITATION: &str = "precip";
    pub const RAINFALL: &str = "rain";
    pub const SNOWFALL: &str = "snow";

    /// Every column the loader requires to be present in the header row
    pub const REQUIRED: &[&str] = &[
        STATION,
        LATITUDE,
        LONGITUDE,
        DATE,
        AVG_TEMP,
        MIN_TEMP,
        MAX_TEMP,
        PRECIPITATION,
        RAINFALL,
        SNOWFALL,
    ];
}

/// Date formats tried in order when parsing the `DATE` column
pub const DEFAULT_DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%d/%m/%Y"];

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Default glob pattern for station files inside a region directory
pub const DEFAULT_FILE_PATTERN: &str = "*.csv";

// =============================================================================
// Configuration
// =============================================================================

/// Application directory name under the platform config directory
pub const APP_CONFIG_DIR: &str = "weather-history";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default region name when none is given on the command line
pub const DEFAULT_REGION_NAME: &str = "Unnamed Region";

// =============================================================================
// Validation
// =============================================================================

/// Valid latitude range in decimal degrees
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in decimal degrees
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;
