//! Reshaping stage: the two final output tables
//!
//! Turns the enriched observation table into the shapes the map
//! dashboards consume: a consecutive-step table pairing each observation
//! with its successor, and a one-row-per-storm start/end summary.
//!
//! - [`full_tracks`] - Successor pairing and per-step distance/speed
//! - [`summary`] - Per-storm duration, total distance, draw radius

pub mod full_tracks;
pub mod summary;

#[cfg(test)]
pub mod tests;

use tracing::info;

use crate::app::models::{EnrichedObservation, StormHeader, StormSummary, TrackStep};
use crate::error::Result;

pub use full_tracks::build_full_tracks;
pub use summary::build_summary;

/// Build both output tables.
pub fn reshape(
    observations: &[EnrichedObservation],
    headers: &[StormHeader],
) -> Result<(Vec<TrackStep>, Vec<StormSummary>)> {
    let steps = build_full_tracks(observations);
    let summaries = build_summary(observations, &steps, headers);

    info!(
        "Reshaped {} observations into {} track steps and {} storm summaries",
        observations.len(),
        steps.len(),
        summaries.len()
    );

    Ok((steps, summaries))
}

/// Group observations by storm, preserving both first-appearance order of
/// storms and row order within each storm.
pub(crate) fn group_by_storm(
    observations: &[EnrichedObservation],
) -> Vec<(&str, Vec<&EnrichedObservation>)> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: std::collections::HashMap<&str, Vec<&EnrichedObservation>> =
        std::collections::HashMap::new();

    for obs in observations {
        let id = obs.track.storm_id.as_str();
        if !groups.contains_key(id) {
            order.push(id);
        }
        groups.entry(id).or_default().push(obs);
    }

    order
        .into_iter()
        .map(|id| {
            let rows = groups.remove(id).unwrap_or_default();
            (id, rows)
        })
        .collect()
}
