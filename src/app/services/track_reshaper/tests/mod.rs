//! Tests for the reshaping stage


use chrono::NaiveDateTime;

use crate::app::models::{EnrichedObservation, StormHeader, TrackObservation};
use crate::app::services::feature_engineer::enrich;
use crate::constants::RADIUS_FIELD_COUNT;

/// Build one enriched observation via the real feature engineer so the
/// projected coordinates and labels stay consistent with production.
pub fn enriched(
    storm_id: &str,
    time_str: &str,
    latitude: f64,
    longitude: f64,
) -> EnrichedObservation {
    let time = NaiveDateTime::parse_from_str(time_str, "%Y-%m-%d %H:%M:%S").unwrap();
    let track = TrackObservation {
        storm_id: storm_id.to_string(),
        record_number: 1,
        time,
        status: "TS".to_string(),
        latitude,
        longitude,
        max_speed: Some(45.0),
        min_pressure: Some(1002.0),
        radii: [Some(0.0); RADIUS_FIELD_COUNT],
    };
    enrich(vec![track]).remove(0)
}

pub fn header(id: &str, name: &str, observation_count: usize) -> StormHeader {
    StormHeader {
        id: id.to_string(),
        name: name.to_string(),
        observation_count,
        year: id[id.len() - 4..].parse().unwrap(),
    }
}
