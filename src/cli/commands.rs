//! Command implementations for the weather history CLI
//!
//! This module contains command execution, logging setup, progress reporting
//! and the report renderers for each output format.

use crate::app::services::region::{RegionSummary, StationSummary};
use crate::app::services::station_history::{MonthlyAverages, StationHistory};
use crate::app::services::station_loader::{RegionLoadStats, RegionLoader, StationCsvLoader};
use crate::cli::args::{Args, Commands, MonthDay, OutputFormat, StationArgs, SummaryArgs};
use crate::config::Config;
use anyhow::{Context, Result, anyhow};
use colored::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{debug, info};

/// Report for a single station
#[derive(Debug, Clone, Serialize)]
pub struct StationReport {
    #[serde(flatten)]
    pub summary: StationSummary,
    pub monthly_average: MonthlyAverages,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_high: Option<RecordHigh>,
}

/// Record high requested for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecordHigh {
    pub month: u32,
    pub day: u32,
    pub high_temp: Option<f64>,
}

impl StationReport {
    pub fn new(history: &StationHistory, record_high: Option<MonthDay>) -> Self {
        Self {
            summary: StationSummary::from_history(history),
            monthly_average: history.monthly_average(),
            record_high: record_high.map(|day| RecordHigh {
                month: day.month,
                day: day.day,
                high_temp: history.record_high(day.month, day.day),
            }),
        }
    }
}

/// Main command runner
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = Config::load_layered(args.config_file.as_deref())
        .context("Failed to load configuration")?;

    match &args.command {
        Some(Commands::Summary(summary_args)) => run_summary(&args, summary_args, config),
        Some(Commands::Station(station_args)) => run_station(station_args, config),
        None => Err(anyhow!("No command given")),
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weather_history={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialise logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load every station file in a directory and report on the region
fn run_summary(args: &Args, summary_args: &SummaryArgs, mut config: Config) -> Result<()> {
    let start_time = Instant::now();

    summary_args.validate()?;
    summary_args.apply_overrides(&mut config);

    let loader = RegionLoader::new(config)?;
    let files = loader
        .discover_files(&summary_args.input_dir)
        .with_context(|| {
            format!(
                "Failed to discover station files in {}",
                summary_args.input_dir.display()
            )
        })?;

    let show_progress =
        args.show_progress() && summary_args.output_format == OutputFormat::Human;
    let progress_bar = if show_progress {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let (region, stats) = loader.load_files(&files, &summary_args.region, |path| {
        if let Some(pb) = &progress_bar {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            pb.set_message(name.to_string());
            pb.inc(1);
        }
    });

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    info!(
        "Loaded region '{}' in {}",
        region.name,
        HumanDuration(start_time.elapsed())
    );

    let summary = region.generate_summary();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match summary_args.output_format {
        OutputFormat::Human => {
            write!(out, "{}", render_region_human(&summary, &stats))?;
            Ok(())
        }
        OutputFormat::Json => write_json(&summary, &mut out),
        OutputFormat::Csv => write_region_csv(&summary, &mut out),
    }
}

/// Load one station file and report on it
fn run_station(station_args: &StationArgs, mut config: Config) -> Result<()> {
    station_args.apply_overrides(&mut config);
    config.validate()?;

    let loader = StationCsvLoader::new(config.loader);
    let result = loader
        .load_file(&station_args.file)
        .with_context(|| format!("Failed to load {}", station_args.file.display()))?;

    let history = result.history.ok_or_else(|| {
        anyhow!(
            "No well-formed rows in {} ({} rows skipped)",
            station_args.file.display(),
            result.stats.rows_skipped
        )
    })?;

    let report = StationReport::new(&history, station_args.record_high);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match station_args.output_format {
        OutputFormat::Human => {
            write!(out, "{}", render_station_human(&report))?;
            Ok(())
        }
        OutputFormat::Json => write_json(&report, &mut out),
        OutputFormat::Csv => write_station_csv(&report, &mut out),
    }
}

fn format_fraction(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn format_streak(summary: &StationSummary) -> String {
    match &summary.longest_streak {
        Some(streak) if streak.length == 1 => format!("1 day on {}", streak.start),
        Some(streak) => format!(
            "{} days, {} to {}",
            streak.length,
            streak.start,
            streak.end()
        ),
        None => "none".to_string(),
    }
}

fn format_date_range(summary: &StationSummary) -> String {
    match (summary.first_date, summary.last_date) {
        (Some(first), Some(last)) => format!("{} to {}", first, last),
        _ => "no records".to_string(),
    }
}

/// Render the region report as colored text
pub fn render_region_human(summary: &RegionSummary, stats: &RegionLoadStats) -> String {
    let mut text = String::new();

    text.push_str(&format!(
        "\n{} {}\n",
        "Region:".bright_green().bold(),
        summary.region.bright_white().bold()
    ));
    text.push_str(&format!(
        "  {} {} stations, {} daily records\n",
        "Loaded:".bright_cyan(),
        summary.station_count,
        summary.total_records
    ));
    text.push_str(&format!(
        "  {} {} found, {} without data, {} duplicates, {} failed\n",
        "Files:".bright_cyan(),
        stats.files_found,
        stats.files_without_data,
        stats.duplicate_stations,
        stats.files_failed
    ));

    let snowiest = match &summary.snowiest {
        Some((name, fraction)) => format!("{} ({} snow)", name.bold(), format_fraction(*fraction)),
        None => "n/a".to_string(),
    };
    text.push_str(&format!("  {} {}\n", "Snowiest:".bright_cyan(), snowiest));

    if !summary.stations.is_empty() {
        text.push_str(&format!("\n{}\n", "Stations".bright_yellow()));
    }
    for station in &summary.stations {
        text.push_str(&format!(
            "  {} ({:.4}, {:.4})\n    {} records, {}\n    snowfall {}, longest streak {}\n",
            station.name.bold(),
            station.latitude,
            station.longitude,
            station.record_count,
            format_date_range(station),
            format_fraction(station.snowfall_fraction),
            format_streak(station)
        ));
    }

    text
}

/// Render the station report as colored text
pub fn render_station_human(report: &StationReport) -> String {
    let summary = &report.summary;
    let mut text = String::new();

    text.push_str(&format!(
        "\n{} {} ({:.4}, {:.4})\n",
        "Station:".bright_green().bold(),
        summary.name.bright_white().bold(),
        summary.latitude,
        summary.longitude
    ));
    text.push_str(&format!(
        "  {} {}, {}\n",
        "Records:".bright_cyan(),
        summary.record_count,
        format_date_range(summary)
    ));
    text.push_str(&format!(
        "  {} {}\n",
        "Snowfall:".bright_cyan(),
        format_fraction(summary.snowfall_fraction)
    ));
    text.push_str(&format!(
        "  {} {}\n",
        "Longest precipitation streak:".bright_cyan(),
        format_streak(summary)
    ));

    if let Some(record) = &report.record_high {
        let high = record
            .high_temp
            .map_or_else(|| "no records".to_string(), |t| format!("{:.1}", t));
        text.push_str(&format!(
            "  {} {:02}-{:02}: {}\n",
            "Record high".bright_cyan(),
            record.month,
            record.day,
            high
        ));
    }

    text.push_str(&format!("\n{}\n", "Monthly average temperature".bright_yellow()));
    for (month, average) in report.monthly_average.iter() {
        let value = average.map_or_else(|| "n/a".dimmed().to_string(), |a| format!("{:.2}", a));
        text.push_str(&format!("  {}  {}\n", month, value));
    }

    text
}

/// Write any report as pretty JSON
pub fn write_json<T: Serialize, W: Write>(report: &T, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

const STATION_CSV_HEADER: [&str; 9] = [
    "station",
    "latitude",
    "longitude",
    "record_count",
    "first_date",
    "last_date",
    "snowfall_fraction",
    "streak_start",
    "streak_length",
];

fn station_csv_fields(summary: &StationSummary) -> Vec<String> {
    let optional = |value: Option<String>| value.unwrap_or_default();

    vec![
        summary.name.clone(),
        summary.latitude.to_string(),
        summary.longitude.to_string(),
        summary.record_count.to_string(),
        optional(summary.first_date.map(|d| d.to_string())),
        optional(summary.last_date.map(|d| d.to_string())),
        summary.snowfall_fraction.to_string(),
        optional(summary.longest_streak.map(|s| s.start.to_string())),
        summary
            .longest_streak
            .map_or(0, |s| s.length)
            .to_string(),
    ]
}

/// Write one CSV row per station
pub fn write_region_csv<W: Write>(summary: &RegionSummary, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record(STATION_CSV_HEADER)?;
    for station in &summary.stations {
        writer.write_record(station_csv_fields(station))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the station aggregates as a single CSV row with one column per month
pub fn write_station_csv<W: Write>(report: &StationReport, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    let mut header: Vec<String> = STATION_CSV_HEADER.iter().map(|h| h.to_string()).collect();
    header.extend(report.monthly_average.iter().map(|(month, _)| month.to_lowercase()));
    if report.record_high.is_some() {
        header.push("record_high".to_string());
    }

    let mut row = station_csv_fields(&report.summary);
    row.extend(
        report
            .monthly_average
            .iter()
            .map(|(_, average)| average.map(|a| a.to_string()).unwrap_or_default()),
    );
    if let Some(record) = &report.record_high {
        row.push(record.high_temp.map(|t| t.to_string()).unwrap_or_default());
    }

    writer.write_record(&header)?;
    writer.write_record(&row)?;
    writer.flush()?;
    Ok(())
}
