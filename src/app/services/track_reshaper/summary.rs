//! Start/end summary table: one row per storm
//!
//! Takes the first and last retained observation of each storm (input
//! order; timestamps are already deduplicated at the 6-hour grain),
//! the storm's total track distance, and its header identity.

use std::collections::HashMap;

use chrono::Datelike;
use tracing::warn;

use super::group_by_storm;
use crate::app::models::{EnrichedObservation, StormHeader, StormSummary, TrackStep};
use crate::constants::DISTANCE_DRAW_SCALE;

const SECONDS_PER_DAY: f64 = 24.0 * 3600.0;

/// Build the per-storm summary table.
///
/// Storms with no retained observations (dropped by the year filter)
/// simply do not appear. Total distance sums the storm's step distances;
/// a single-observation storm has no steps and totals zero.
pub fn build_summary(
    observations: &[EnrichedObservation],
    steps: &[TrackStep],
    headers: &[StormHeader],
) -> Vec<StormSummary> {
    let identity: HashMap<&str, &StormHeader> =
        headers.iter().map(|h| (h.id.as_str(), h)).collect();

    let mut total_distances: HashMap<&str, f64> = HashMap::new();
    for step in steps {
        *total_distances.entry(step.storm_id.as_str()).or_default() += step.distance_km;
    }

    let mut summaries = Vec::new();

    for (storm_id, rows) in group_by_storm(observations) {
        // Grouping guarantees at least one row per storm.
        let first = rows[0];
        let last = rows[rows.len() - 1];

        let Some(header) = identity.get(storm_id) else {
            // IDs come from the header expansion, so this indicates an
            // upstream bug rather than bad input.
            warn!("Storm {} has observations but no header entry; skipped", storm_id);
            continue;
        };

        let duration_seconds = (last.track.time - first.track.time).num_seconds() as f64;
        let total_distance_km = total_distances.get(storm_id).copied().unwrap_or(0.0);

        summaries.push(StormSummary {
            storm_id: storm_id.to_string(),
            name: header.name.clone(),
            year: header.year,
            month: first.track.time.month(),
            zone: first.zone,
            latitude_start: first.track.latitude,
            longitude_start: first.track.longitude,
            x_start: first.x,
            y_start: first.y,
            latitude_end: last.track.latitude,
            longitude_end: last.track.longitude,
            x_end: last.x,
            y_end: last.y,
            duration_days: duration_seconds / SECONDS_PER_DAY,
            total_distance_km,
            distance_draw: DISTANCE_DRAW_SCALE * total_distance_km,
        });
    }

    summaries
}
