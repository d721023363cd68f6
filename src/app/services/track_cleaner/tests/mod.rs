//! Test fixtures for the cleaning stage

mod coordinate_tests;
mod radii_tests;

use crate::app::models::{RawTrackRow, TrackObservation};
use crate::constants::RADIUS_FIELD_COUNT;
use chrono::NaiveDate;

/// Raw row fixture with sane defaults, on the synoptic schedule.
pub fn raw_row(storm_id: &str, record_number: usize, date: &str, hour: &str) -> RawTrackRow {
    RawTrackRow {
        storm_id: storm_id.to_string(),
        record_number,
        date: date.to_string(),
        hour: hour.to_string(),
        status: "TS".to_string(),
        latitude: "28.0N".to_string(),
        longitude: "94.8W".to_string(),
        max_speed: Some(45.0),
        min_pressure: Some(1002.0),
        radii: [None; RADIUS_FIELD_COUNT],
    }
}

/// Cleaned observation fixture for radii/year-filter tests.
pub fn observation(
    storm_id: &str,
    year: i32,
    max_speed: Option<f64>,
    radii: [Option<f64>; RADIUS_FIELD_COUNT],
) -> TrackObservation {
    TrackObservation {
        storm_id: storm_id.to_string(),
        record_number: 1,
        time: NaiveDate::from_ymd_opt(year, 8, 1)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap(),
        status: "TS".to_string(),
        latitude: 28.0,
        longitude: -94.8,
        max_speed,
        min_pressure: Some(1002.0),
        radii,
    }
}
