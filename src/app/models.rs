//! Data models for HURDAT2 processing
//!
//! Core structures for storm identity records and per-observation track
//! data, following the NOAA HURDAT2 fixed-format specification. Each
//! pipeline stage consumes one row type and produces the next; rows are
//! never mutated after creation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::RADIUS_FIELD_COUNT;
use crate::error::{HurdatError, Result};

// =============================================================================
// Storm Identity
// =============================================================================

/// Storm identity record parsed from a HURDAT2 header line.
///
/// One per storm, created once on parse and immutable thereafter. The ID
/// follows the basin pattern (e.g. "AL011970"); the year is the ID's
/// four-digit suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StormHeader {
    /// Unique storm identifier, e.g. "AL011970".
    pub id: String,

    /// Storm name, or "UNNAMED" for older records.
    pub name: String,

    /// Number of track lines this header accounts for.
    pub observation_count: usize,

    /// Season year, derived from the last four characters of the ID.
    pub year: i32,
}

// =============================================================================
// Track Rows, Stage by Stage
// =============================================================================

/// Track observation as read from a HURDAT2 track line: fields split,
/// numerics cast, sentinels mapped to missing, storm ID attached.
/// Timestamps and coordinates are still in their raw string encodings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTrackRow {
    /// Storm this row belongs to (attached positionally from the headers).
    pub storm_id: String,

    /// 1-based position among the track lines, for error context.
    pub record_number: usize,

    /// 8-digit date, "YYYYMMDD".
    pub date: String,

    /// 4-digit hour, "HHMM" (leading-zero form).
    pub hour: String,

    /// Storm status category, e.g. "HU", "TS", "TD".
    pub status: String,

    /// Latitude in "<magnitude><N|S>" form, e.g. "28.0N".
    pub latitude: String,

    /// Longitude in "<magnitude><W|E>" form, e.g. "94.8W".
    pub longitude: String,

    /// Maximum sustained wind in knots, if recorded.
    pub max_speed: Option<f64>,

    /// Minimum central pressure in millibars, if recorded.
    pub min_pressure: Option<f64>,

    /// Wind radii: Low/Med/High thresholds by NE, SE, SW, NW quadrants.
    pub radii: [Option<f64>; RADIUS_FIELD_COUNT],
}

/// Track observation after cleaning: a proper timestamp on the 6-hour
/// synoptic schedule and signed decimal-degree coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackObservation {
    pub storm_id: String,
    pub record_number: usize,
    pub time: NaiveDateTime,
    pub status: String,

    /// Degrees north, in [-90, 90].
    pub latitude: f64,

    /// Degrees east, in [-180, 180].
    pub longitude: f64,

    pub max_speed: Option<f64>,
    pub min_pressure: Option<f64>,
    pub radii: [Option<f64>; RADIUS_FIELD_COUNT],
}

impl TrackObservation {
    /// Validate coordinate ranges.
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(HurdatError::parse(
                "Latitude",
                self.record_number,
                &self.latitude.to_string(),
                "must be between -90 and 90 degrees",
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(HurdatError::parse(
                "Longitude",
                self.record_number,
                &self.longitude.to_string(),
                "must be between -180 and 180 degrees",
            ));
        }
        Ok(())
    }
}

/// Track observation with derived features attached: projected planar
/// coordinates, season, and maritime zone. Derived, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedObservation {
    pub track: TrackObservation,

    /// Web Mercator easting in meters.
    pub x: f64,

    /// Web Mercator northing in meters.
    pub y: f64,

    pub season: Season,
    pub zone: Zone,
}

// =============================================================================
// Derived Categories
// =============================================================================

/// Meteorological season, Northern-Hemisphere convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Fixed month-to-season mapping, total over months 1..=12.
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => unreachable!("chrono months are always 1..=12"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        }
    }
}

/// Maritime zone label for the map filters. The boundary is two hand-fit
/// lines following the island barrier (Cuba etc.), not a real coastline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    MexicoCaribbean,
    Atlantic,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::MexicoCaribbean => "Mexico_Caribbean",
            Zone::Atlantic => "Atlantic",
        }
    }
}

// =============================================================================
// Output Rows
// =============================================================================

/// One consecutive 6-hour step of a storm track: an observation paired
/// with its chronological successor within the same storm. The final
/// observation of each storm has no successor and produces no step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackStep {
    pub storm_id: String,

    /// Time, status, season and zone of the step's start observation.
    pub time: NaiveDateTime,
    pub status: String,
    pub season: Season,
    pub zone: Zone,

    pub latitude_start: f64,
    pub longitude_start: f64,
    pub latitude_end: f64,
    pub longitude_end: f64,

    /// Great-circle distance between the pair, in kilometers.
    pub distance_km: f64,

    pub max_speed: Option<f64>,

    /// Distance over the fixed 6-hour synoptic interval, in km/h.
    pub avg_speed_kmh: f64,

    pub x_start: f64,
    pub y_start: f64,
    pub x_end: f64,
    pub y_end: f64,
}

/// Per-storm start/end summary row for the overview map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StormSummary {
    pub storm_id: String,
    pub name: String,
    pub year: i32,

    /// Month and zone at the first retained observation.
    pub month: u32,
    pub zone: Zone,

    pub latitude_start: f64,
    pub longitude_start: f64,
    pub x_start: f64,
    pub y_start: f64,
    pub latitude_end: f64,
    pub longitude_end: f64,
    pub x_end: f64,
    pub y_end: f64,

    /// Wall-clock span from first to last observation, in days.
    pub duration_days: f64,

    /// Sum of all per-step great-circle distances, in kilometers.
    pub total_distance_km: f64,

    /// Total distance scaled for map rendering.
    pub distance_draw: f64,
}

impl StormSummary {
    /// Duration rendered the way the downstream tables expect it.
    pub fn duration_label(&self) -> String {
        format!("{} days", self.duration_days)
    }
}
