//! CSV output for the two final tables
//!
//! Materializes the track-step and storm-summary tables as polars
//! DataFrames and writes them as comma-delimited files with a synthetic
//! leading row-index column (pandas `to_csv` convention, which the
//! downstream dashboards expect). Missing numerics serialize as empty
//! fields. The pipeline never reads these files back.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::info;

use crate::app::models::{StormSummary, TrackStep};
use crate::constants::OUTPUT_TIME_FORMAT;
use crate::error::Result;

/// Write the full consecutive-step track table.
pub fn write_full_tracks(steps: &[TrackStep], path: &Path) -> Result<()> {
    let mut df = full_tracks_dataframe(steps)?;
    write_csv(&mut df, path)?;
    info!("Wrote {} track steps to {}", steps.len(), path.display());
    Ok(())
}

/// Write the per-storm start/end summary table.
pub fn write_summary(summaries: &[StormSummary], path: &Path) -> Result<()> {
    let mut df = summary_dataframe(summaries)?;
    write_csv(&mut df, path)?;
    info!(
        "Wrote {} storm summaries to {}",
        summaries.len(),
        path.display()
    );
    Ok(())
}

/// Build the full-track DataFrame in the published column order.
pub fn full_tracks_dataframe(steps: &[TrackStep]) -> Result<DataFrame> {
    let index: Vec<u32> = (0..steps.len() as u32).collect();

    let df = df!(
        "" => index,
        "ID" => steps.iter().map(|s| s.storm_id.as_str()).collect::<Vec<_>>(),
        "Time" => steps
            .iter()
            .map(|s| s.time.format(OUTPUT_TIME_FORMAT).to_string())
            .collect::<Vec<_>>(),
        "Status" => steps.iter().map(|s| s.status.as_str()).collect::<Vec<_>>(),
        "Latitude_start" => steps.iter().map(|s| s.latitude_start).collect::<Vec<_>>(),
        "Longitude_start" => steps.iter().map(|s| s.longitude_start).collect::<Vec<_>>(),
        "Latitude_end" => steps.iter().map(|s| s.latitude_end).collect::<Vec<_>>(),
        "Longitude_end" => steps.iter().map(|s| s.longitude_end).collect::<Vec<_>>(),
        "Distance" => steps.iter().map(|s| s.distance_km).collect::<Vec<_>>(),
        "MaxSpeed" => steps.iter().map(|s| s.max_speed).collect::<Vec<_>>(),
        "AvgSpeed" => steps.iter().map(|s| s.avg_speed_kmh).collect::<Vec<_>>(),
        "Season" => steps.iter().map(|s| s.season.as_str()).collect::<Vec<_>>(),
        "Zone" => steps.iter().map(|s| s.zone.as_str()).collect::<Vec<_>>(),
        "x_start" => steps.iter().map(|s| s.x_start).collect::<Vec<_>>(),
        "y_start" => steps.iter().map(|s| s.y_start).collect::<Vec<_>>(),
        "x_end" => steps.iter().map(|s| s.x_end).collect::<Vec<_>>(),
        "y_end" => steps.iter().map(|s| s.y_end).collect::<Vec<_>>(),
    )?;

    Ok(df)
}

/// Build the summary DataFrame in the published column order.
pub fn summary_dataframe(summaries: &[StormSummary]) -> Result<DataFrame> {
    let index: Vec<u32> = (0..summaries.len() as u32).collect();

    let df = df!(
        "" => index,
        "ID" => summaries.iter().map(|s| s.storm_id.as_str()).collect::<Vec<_>>(),
        "Name" => summaries.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        "Year" => summaries.iter().map(|s| s.year).collect::<Vec<_>>(),
        "Month" => summaries.iter().map(|s| s.month).collect::<Vec<_>>(),
        "Zone" => summaries.iter().map(|s| s.zone.as_str()).collect::<Vec<_>>(),
        "Latitude_start" => summaries.iter().map(|s| s.latitude_start).collect::<Vec<_>>(),
        "Longitude_start" => summaries.iter().map(|s| s.longitude_start).collect::<Vec<_>>(),
        "x_start" => summaries.iter().map(|s| s.x_start).collect::<Vec<_>>(),
        "y_start" => summaries.iter().map(|s| s.y_start).collect::<Vec<_>>(),
        "Latitude_end" => summaries.iter().map(|s| s.latitude_end).collect::<Vec<_>>(),
        "Longitude_end" => summaries.iter().map(|s| s.longitude_end).collect::<Vec<_>>(),
        "x_end" => summaries.iter().map(|s| s.x_end).collect::<Vec<_>>(),
        "y_end" => summaries.iter().map(|s| s.y_end).collect::<Vec<_>>(),
        "Duration" => summaries.iter().map(|s| s.duration_label()).collect::<Vec<_>>(),
        "Distance" => summaries.iter().map(|s| s.total_distance_km).collect::<Vec<_>>(),
        "Distance_draw" => summaries.iter().map(|s| s.distance_draw).collect::<Vec<_>>(),
    )?;

    Ok(df)
}

fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    // Default QuoteStyle::Necessary renders the empty index-column name
    // as `""`; pandas' to_csv convention leaves it bare.
    CsvWriter::new(file)
        .include_header(true)
        .with_quote_style(QuoteStyle::Never)
        .finish(df)?;
    Ok(())
}
