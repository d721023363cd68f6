//! Season and maritime zone labeling

use crate::app::models::{Season, Zone};
use crate::constants::{
    ZONE_CUBA_INTERCEPT, ZONE_CUBA_SLOPE, ZONE_FLORIDA_INTERCEPT, ZONE_FLORIDA_SLOPE,
    ZONE_MERIDIAN_LIMIT,
};

/// Fixed month-to-season mapping, Northern-Hemisphere convention.
pub fn classify_season(month: u32) -> Season {
    Season::from_month(month)
}

/// Label a point as Gulf of Mexico/Caribbean or open Atlantic.
///
/// The boundary is two hand-fit lines following the natural island
/// barrier: one across the Cuba-Central America strait (applied only
/// west of 61°W), one across the Florida-Cuba strait. A deliberate
/// simplification, not a real coastline dataset.
pub fn classify_zone(longitude: f64, latitude: f64) -> Zone {
    let west_of_islands = longitude < ZONE_MERIDIAN_LIMIT;
    let below_cuba_line = latitude + ZONE_CUBA_SLOPE * longitude < ZONE_CUBA_INTERCEPT;
    let below_florida_line = latitude + ZONE_FLORIDA_SLOPE * longitude < ZONE_FLORIDA_INTERCEPT;

    if (west_of_islands && below_cuba_line) || below_florida_line {
        Zone::MexicoCaribbean
    } else {
        Zone::Atlantic
    }
}
