//! End-to-end pipeline orchestration
//!
//! A strict linear sequence of total transformations on immutable
//! tables: parse, build, clean, enrich, reshape, write. No stage is
//! retried or re-entrant; the first error aborts the run. Each stage
//! fully materializes its output before the next begins.

use tracing::{debug, info};

use crate::app::services::feature_engineer::enrich;
use crate::app::services::hurdat_parser::{
    build_header_table, build_track_table, expand_identifiers, load_hurdat_file,
};
use crate::app::services::table_writer::{write_full_tracks, write_summary};
use crate::app::services::track_cleaner::clean;
use crate::app::services::track_reshaper::reshape;
use crate::config::Config;
use crate::error::Result;

/// Per-stage row counts for the CLI summary.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub storms_parsed: usize,
    pub track_lines_parsed: usize,
    pub observations_cleaned: usize,
    pub track_steps: usize,
    pub storm_summaries: usize,
}

/// Run the full pipeline described by `config`.
pub fn run(config: &Config) -> Result<PipelineReport> {
    config.validate()?;

    info!(
        "Processing {} into {}",
        config.input_path.display(),
        config.output_dir.display()
    );

    // Extraction: classify lines, build both tables, attach IDs.
    let classified = load_hurdat_file(&config.input_path, &config.basin_prefix)?;
    let headers = build_header_table(&classified.header_lines)?;
    let storm_ids = expand_identifiers(&headers);
    let raw_rows = build_track_table(&classified.track_lines, &storm_ids)?;
    debug!(
        "Extraction complete: {} storms, {} track rows",
        headers.len(),
        raw_rows.len()
    );

    // Cleaning: timestamps, coordinates, implied radii, year cutoff.
    let track_line_count = raw_rows.len();
    let observations = clean(raw_rows, config.min_year)?;

    // Feature engineering: projection, season, zone.
    let enriched = enrich(observations);

    // Reshaping into the two output tables.
    let (steps, summaries) = reshape(&enriched, &headers)?;

    write_full_tracks(&steps, &config.full_tracks_path())?;
    write_summary(&summaries, &config.start_end_path())?;

    Ok(PipelineReport {
        storms_parsed: headers.len(),
        track_lines_parsed: track_line_count,
        observations_cleaned: enriched.len(),
        track_steps: steps.len(),
        storm_summaries: summaries.len(),
    })
}
