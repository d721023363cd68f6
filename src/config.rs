//! Configuration management and validation.
//!
//! Processing parameters for the HURDAT2 pipeline: input/output locations,
//! the basin prefix used for line classification, the year cutoff, and
//! output table naming.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::constants::{
    DEFAULT_BASIN_PREFIX, DEFAULT_MIN_YEAR, FULL_TRACKS_FILENAME, START_END_FILENAME,
};
use crate::error::{HurdatError, Result};

/// Pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the HURDAT2 text file.
    pub input_path: PathBuf,

    /// Directory receiving the two output tables. Created if absent.
    pub output_dir: PathBuf,

    /// Prefix identifying header lines (basin code, e.g. "AL").
    pub basin_prefix: String,

    /// Rows with an observation year below this cutoff are dropped.
    /// Radius/wind data density before 1970 is unreliable upstream.
    pub min_year: i32,

    /// Filename for the full consecutive-step track table.
    pub full_tracks_filename: String,

    /// Filename for the per-storm start/end summary table.
    pub start_end_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("hurdat2.txt"),
            output_dir: PathBuf::from("output"),
            basin_prefix: DEFAULT_BASIN_PREFIX.to_string(),
            min_year: DEFAULT_MIN_YEAR,
            full_tracks_filename: FULL_TRACKS_FILENAME.to_string(),
            start_end_filename: START_END_FILENAME.to_string(),
        }
    }
}

impl Config {
    /// Validate configuration before the run starts.
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.is_file() {
            return Err(HurdatError::InputNotFound {
                path: self.input_path.clone(),
            });
        }

        if self.basin_prefix.is_empty() {
            return Err(HurdatError::config(
                "basin prefix must not be empty: header lines cannot be classified",
            ));
        }

        if self.full_tracks_filename.is_empty() || self.start_end_filename.is_empty() {
            return Err(HurdatError::config("output filenames must not be empty"));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }

    /// Full path of the full-track output table.
    pub fn full_tracks_path(&self) -> PathBuf {
        self.output_dir.join(&self.full_tracks_filename)
    }

    /// Full path of the start/end summary output table.
    pub fn start_end_path(&self) -> PathBuf {
        self.output_dir.join(&self.start_end_filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.basin_prefix, "AL");
        assert_eq!(config.min_year, 1970);
        assert_eq!(config.full_tracks_filename, "df_full_tracks.csv");
    }

    #[test]
    fn test_missing_input_rejected() {
        let config = Config {
            input_path: PathBuf::from("/nonexistent/hurdat2.txt"),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(HurdatError::InputNotFound { .. })
        ));
    }

    #[test]
    fn test_output_paths_join_dir() {
        let config = Config {
            output_dir: PathBuf::from("/tmp/out"),
            ..Config::default()
        };
        assert_eq!(
            config.full_tracks_path(),
            PathBuf::from("/tmp/out/df_full_tracks.csv")
        );
        assert_eq!(
            config.start_end_path(),
            PathBuf::from("/tmp/out/df_start_end.csv")
        );
    }
}
