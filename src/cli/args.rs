//! Command-line argument definitions for the HURDAT2 processor
//!
//! Defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::{DEFAULT_BASIN_PREFIX, DEFAULT_MIN_YEAR, DEFAULT_SAMPLE_SEED};

/// CLI arguments for the HURDAT2 hurricane track processor
///
/// Converts NOAA HURDAT2 historical hurricane track text into two
/// analysis-ready CSV tables for interactive map visualization.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hurdat-processor",
    version,
    about = "Convert NOAA HURDAT2 hurricane track records into analysis-ready CSV tables",
    arg_required_else_help = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress progress output and log timestamps
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        global = true
    )]
    pub log_level: String,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the full pipeline: parse, clean, derive features, write tables
    Process(ProcessArgs),
    /// Print a reproducible random selection of storm IDs for demo maps
    Sample(SampleArgs),
}

/// Arguments for the process command (main data processing)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Path to the HURDAT2 text file (e.g. hurdat2.txt)
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input_path: PathBuf,

    /// Output directory for the generated CSV tables
    ///
    /// Will be created if it doesn't exist. Defaults to ./output
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "output"
    )]
    pub output_dir: PathBuf,

    /// Drop observations before this year
    ///
    /// Wind radius data density before 1970 is unreliable; the cutoff
    /// is a fixed upstream decision, inclusive of the given year.
    #[arg(long = "min-year", value_name = "YEAR", default_value_t = DEFAULT_MIN_YEAR)]
    pub min_year: i32,

    /// Basin prefix identifying header lines
    #[arg(long = "basin-prefix", value_name = "PREFIX", default_value = DEFAULT_BASIN_PREFIX)]
    pub basin_prefix: String,

    /// Show what would be processed without writing output files
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Arguments for the sample command
#[derive(Debug, Clone, Parser)]
pub struct SampleArgs {
    /// Path to the HURDAT2 text file
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input_path: PathBuf,

    /// Number of storm IDs to draw
    #[arg(short = 'n', long = "count", value_name = "N", default_value_t = 10)]
    pub count: usize,

    /// RNG seed; the same seed always yields the same selection
    #[arg(long = "seed", value_name = "SEED", default_value_t = DEFAULT_SAMPLE_SEED)]
    pub seed: u64,

    /// Basin prefix identifying header lines
    #[arg(long = "basin-prefix", value_name = "PREFIX", default_value = DEFAULT_BASIN_PREFIX)]
    pub basin_prefix: String,
}

impl Args {
    /// Effective log level for the tracing filter.
    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}
