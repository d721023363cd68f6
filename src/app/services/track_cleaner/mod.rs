//! Cleaning stage for raw track rows
//!
//! Normalizes the raw HURDAT2 encodings into analysis-ready values:
//! timestamps onto the 6-hour synoptic schedule, hemisphere-suffixed
//! coordinates into signed degrees, structurally-implied wind radii
//! filled, and the unreliable pre-cutoff years dropped.
//!
//! - [`timestamps`] - Date/hour combination and synoptic-schedule filter
//! - [`coordinates`] - Hemisphere sign convention parsing
//! - [`radii`] - Implied zero-fill of wind radius fields
//!
//! Each step is a pure transformation returning a new table; a failure in
//! any step aborts the whole run.

pub mod coordinates;
pub mod radii;
pub mod timestamps;

#[cfg(test)]
pub mod tests;

use chrono::{Datelike, NaiveDateTime};
use tracing::{debug, info};

use crate::app::models::{RawTrackRow, TrackObservation};
use crate::constants::RADIUS_FIELD_COUNT;
use crate::error::Result;

pub use coordinates::normalize_coordinates;
pub use radii::fill_implied_radii;
pub use timestamps::normalize_timestamps;

/// Track row with a normalized timestamp but coordinates still in their
/// raw hemisphere-suffixed encoding. Intermediate between the raw table
/// and [`TrackObservation`].
#[derive(Debug, Clone, PartialEq)]
pub struct TimedTrackRow {
    pub storm_id: String,
    pub record_number: usize,
    pub time: NaiveDateTime,
    pub status: String,
    pub latitude: String,
    pub longitude: String,
    pub max_speed: Option<f64>,
    pub min_pressure: Option<f64>,
    pub radii: [Option<f64>; RADIUS_FIELD_COUNT],
}

/// Run the full cleaning stage in the canonical order.
pub fn clean(rows: Vec<RawTrackRow>, min_year: i32) -> Result<Vec<TrackObservation>> {
    let timed = normalize_timestamps(rows)?;
    let observations = normalize_coordinates(timed)?;
    let filled = fill_implied_radii(observations);
    let retained = filter_by_year(filled, min_year);

    info!("Cleaning stage retained {} observations", retained.len());
    Ok(retained)
}

/// Retain rows whose observation year is at or after the cutoff.
pub fn filter_by_year(rows: Vec<TrackObservation>, min_year: i32) -> Vec<TrackObservation> {
    let before = rows.len();
    let retained: Vec<TrackObservation> = rows
        .into_iter()
        .filter(|row| row.time.year() >= min_year)
        .collect();

    debug!(
        "Year filter (>= {}): {} of {} rows retained",
        min_year,
        retained.len(),
        before
    );

    retained
}
