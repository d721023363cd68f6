//! Feature derivation over cleaned track observations
//!
//! Adds the map-facing features to each observation: projected Web
//! Mercator coordinates, the meteorological season, and the maritime
//! zone label. Also hosts the great-circle distance used by the
//! reshaping stage.
//!
//! - [`projection`] - Spherical Web Mercator forward projection
//! - [`classify`] - Season and maritime zone labeling
//! - [`distance`] - Haversine great-circle distance

pub mod classify;
pub mod distance;
pub mod projection;

#[cfg(test)]
pub mod tests;

use chrono::Datelike;
use tracing::info;

use crate::app::models::{EnrichedObservation, TrackObservation};

pub use classify::{classify_season, classify_zone};
pub use distance::great_circle_distance_km;
pub use projection::project_web_mercator;

/// Attach derived features to every observation.
pub fn enrich(observations: Vec<TrackObservation>) -> Vec<EnrichedObservation> {
    let enriched: Vec<EnrichedObservation> = observations
        .into_iter()
        .map(|track| {
            let (x, y) = project_web_mercator(track.longitude, track.latitude);
            let season = classify_season(track.time.month());
            let zone = classify_zone(track.longitude, track.latitude);
            EnrichedObservation {
                track,
                x,
                y,
                season,
                zone,
            }
        })
        .collect();

    info!("Derived features for {} observations", enriched.len());
    enriched
}
