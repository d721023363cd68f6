//! HURDAT2 Processor Library
//!
//! A Rust library for converting NOAA HURDAT2 historical hurricane track
//! records into two analysis-ready CSV tables consumed by interactive map
//! visualizations.
//!
//! This library provides tools for:
//! - Classifying HURDAT2 header and track lines and rebuilding their
//!   positional association
//! - Cleaning timestamps onto the 6-hour synoptic schedule and parsing
//!   hemisphere-suffixed coordinates
//! - Filling structurally-implied wind radius values
//! - Deriving Web Mercator coordinates, season and maritime zone labels
//! - Reshaping tracks into consecutive-step and per-storm summary tables
//! - Fatal, context-rich error handling with no partial-success mode

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod feature_engineer;
        pub mod hurdat_parser;
        pub mod pipeline;
        pub mod sampling;
        pub mod table_writer;
        pub mod track_cleaner;
        pub mod track_reshaper;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    EnrichedObservation, RawTrackRow, Season, StormHeader, StormSummary, TrackObservation,
    TrackStep, Zone,
};
pub use app::services::pipeline::{run as run_pipeline, PipelineReport};
pub use config::Config;
pub use error::{HurdatError, Result};
