//! Directory loader building a region from station files
//!
//! Discovers station files with walkdir and the configured glob pattern, loads
//! each one and adds the resulting histories to a [`Region`]. Files are visited
//! in sorted path order, so with duplicate station names the first file wins.

use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use super::loader::StationCsvLoader;
use super::stats::RegionLoadStats;
use crate::app::services::region::Region;
use crate::config::Config;
use crate::{Error, Result};

/// Loader for a directory of station files
#[derive(Debug, Clone)]
pub struct RegionLoader {
    config: Config,
    station_loader: StationCsvLoader,
}

impl RegionLoader {
    /// Create a loader after validating the configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let station_loader = StationCsvLoader::new(config.loader.clone());

        Ok(Self {
            config,
            station_loader,
        })
    }

    /// Find station files under `dir` matching the discovery pattern
    pub fn discover_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(Error::file_not_found(dir.display().to_string()));
        }

        let pattern = glob::Pattern::new(&self.config.discovery.file_pattern)?;
        let max_depth = if self.config.discovery.recursive {
            usize::MAX
        } else {
            1
        };

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(max_depth) {
            let entry = entry.map_err(|e| {
                Error::directory_traversal(format!("Failed to scan {}", dir.display()), e)
            })?;

            if entry.file_type().is_file()
                && pattern.matches(&entry.file_name().to_string_lossy())
            {
                files.push(entry.into_path());
            }
        }

        files.sort();
        info!(
            "Found {} station files in {} matching '{}'",
            files.len(),
            dir.display(),
            self.config.discovery.file_pattern
        );
        Ok(files)
    }

    /// Discover and load every station file in `dir` into a new region
    pub fn load_directory(
        &self,
        dir: &Path,
        region_name: &str,
    ) -> Result<(Region, RegionLoadStats)> {
        let files = self.discover_files(dir)?;
        Ok(self.load_files(&files, region_name, |_| {}))
    }

    /// Load the given files into a new region
    ///
    /// `on_file` is called before each file is read, e.g. to advance a progress
    /// bar. A file that cannot be read is logged and counted, not fatal.
    pub fn load_files<F>(
        &self,
        files: &[PathBuf],
        region_name: &str,
        mut on_file: F,
    ) -> (Region, RegionLoadStats)
    where
        F: FnMut(&Path),
    {
        let mut region = Region::new(region_name);
        let mut stats = RegionLoadStats {
            files_found: files.len(),
            ..Default::default()
        };

        for path in files {
            on_file(path);

            let result = match self.station_loader.load_file(path) {
                Ok(result) => result,
                Err(e) => {
                    warn!("Failed to load {}: {}", path.display(), e);
                    stats.files_failed += 1;
                    continue;
                }
            };
            stats.absorb(&result.stats);

            match result.history {
                Some(history) => {
                    if region.add_history(history) {
                        stats.files_loaded += 1;
                    } else {
                        warn!(
                            "Duplicate station in {}, keeping the earlier file",
                            path.display()
                        );
                        stats.duplicate_stations += 1;
                    }
                }
                None => stats.files_without_data += 1,
            }
        }

        info!(
            "Region '{}': {} stations from {} files ({} without data, {} duplicates, {} failed)",
            region.name,
            region.len(),
            stats.files_found,
            stats.files_without_data,
            stats.duplicate_stations,
            stats.files_failed
        );

        (region, stats)
    }
}
