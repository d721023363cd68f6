//! Full-track table: consecutive observation pairs
//!
//! Pairs every observation with its chronological successor within the
//! same storm (a shift-by-one within the storm group). The last
//! observation of each storm has no successor and produces no row.

use tracing::debug;

use super::group_by_storm;
use crate::app::models::{EnrichedObservation, TrackStep};
use crate::app::services::feature_engineer::great_circle_distance_km;
use crate::constants::SYNOPTIC_INTERVAL_HOURS;

/// Build the consecutive-step table from the enriched observations.
pub fn build_full_tracks(observations: &[EnrichedObservation]) -> Vec<TrackStep> {
    let mut steps = Vec::new();

    for (storm_id, rows) in group_by_storm(observations) {
        let step_count_before = steps.len();

        for pair in rows.windows(2) {
            steps.push(make_step(pair[0], pair[1]));
        }

        debug!(
            "Storm {}: {} observations -> {} steps",
            storm_id,
            rows.len(),
            steps.len() - step_count_before
        );
    }

    steps
}

/// Build one step row from an observation and its successor.
///
/// Time, status, season and zone carry over from the start observation;
/// average speed assumes the fixed 6-hour synoptic interval.
fn make_step(start: &EnrichedObservation, end: &EnrichedObservation) -> TrackStep {
    let distance_km = great_circle_distance_km(
        start.track.latitude,
        start.track.longitude,
        end.track.latitude,
        end.track.longitude,
    );

    TrackStep {
        storm_id: start.track.storm_id.clone(),
        time: start.track.time,
        status: start.track.status.clone(),
        season: start.season,
        zone: start.zone,
        latitude_start: start.track.latitude,
        longitude_start: start.track.longitude,
        latitude_end: end.track.latitude,
        longitude_end: end.track.longitude,
        distance_km,
        max_speed: start.track.max_speed,
        avg_speed_kmh: distance_km / SYNOPTIC_INTERVAL_HOURS,
        x_start: start.x,
        y_start: start.y,
        x_end: end.x,
        y_end: end.y,
    }
}
