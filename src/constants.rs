//! Application constants for the HURDAT2 processor
//!
//! Schema widths, sentinel values, the synoptic schedule, geographic
//! constants, and output naming used throughout the pipeline.

// =============================================================================
// HURDAT2 Line Schema
// =============================================================================

/// Basin prefix that identifies a header line (North Atlantic basin).
pub const DEFAULT_BASIN_PREFIX: &str = "AL";

/// Field delimiter in both header and track lines.
pub const FIELD_DELIMITER: char = ',';

/// Meaningful fields in a header line: ID, Name, ObservationCount.
/// A trailing fourth token (empty, from the trailing comma) is discarded.
pub const HEADER_FIELD_COUNT: usize = 3;

/// Positional fields in a track line, including the empty trailing token.
pub const TRACK_FIELD_COUNT: usize = 21;

/// Wind radius columns carried per observation: three speed thresholds
/// (34, 50, 64 kt) by four quadrants (NE, SE, SW, NW).
pub const RADIUS_FIELD_COUNT: usize = 12;

/// Sentinel marking a missing numeric value in HURDAT2.
pub const MISSING_SENTINEL: f64 = -999.0;

/// Secondary missing-value sentinel found only in the MaxSpeed column.
/// Some source records erroneously use -99 for missing speed.
pub const MISSING_SPEED_SENTINEL: f64 = -99.0;

// =============================================================================
// Synoptic Schedule
// =============================================================================

/// The four canonical 6-hour synoptic observation times, as rendered
/// hour strings. Observations outside this schedule are dropped.
pub const SYNOPTIC_HOURS: &[&str] = &["00:00", "06:00", "12:00", "18:00"];

/// Hours between consecutive synoptic observations.
pub const SYNOPTIC_INTERVAL_HOURS: f64 = 6.0;

/// HURDAT2 date field format (8-digit).
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Timestamp rendering in the output tables.
pub const OUTPUT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Wind Radius Thresholds
// =============================================================================

/// MaxSpeed bucket bounds (knots) for the implied-radius fill. A speed in
/// (0, 34] implies all twelve radii are 0; (34, 50] implies the medium and
/// high radii are 0; (50, 64] implies only the high radii are 0.
pub const RADIUS_SPEED_BOUNDS: &[f64] = &[0.0, 34.0, 50.0, 64.0];

// =============================================================================
// Geography
// =============================================================================

/// Earth radius for the spherical Web Mercator projection, in meters.
pub const MERCATOR_EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Earth radius for great-circle distances, in kilometers.
pub const HAVERSINE_EARTH_RADIUS_KM: f64 = 6_371.0;

/// Longitude west of which the Cuba-Central America boundary line applies.
pub const ZONE_MERIDIAN_LIMIT: f64 = -61.0;

/// Hand-fit line approximating the Cuba-Central America strait:
/// a point is Caribbean-side when lat + CUBA_SLOPE * lon < CUBA_INTERCEPT.
pub const ZONE_CUBA_SLOPE: f64 = 6.0 / 19.0;
pub const ZONE_CUBA_INTERCEPT: f64 = -3.3;

/// Hand-fit line approximating the Florida-Cuba strait:
/// a point is Caribbean-side when lat + FLORIDA_SLOPE * lon < FLORIDA_INTERCEPT.
pub const ZONE_FLORIDA_SLOPE: f64 = 6.0;
pub const ZONE_FLORIDA_INTERCEPT: f64 = -458.0;

// =============================================================================
// Pipeline Defaults
// =============================================================================

/// Default year cutoff: radius and wind data before 1970 is considered
/// unreliable upstream. Fixed external decision, not re-derived here.
pub const DEFAULT_MIN_YEAR: i32 = 1970;

/// Scale factor turning a storm's total distance into a draw radius
/// for the downstream map rendering.
pub const DISTANCE_DRAW_SCALE: f64 = 42.0;

/// Default seed for the demo storm sampler.
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

// =============================================================================
// Output Files
// =============================================================================

/// Full consecutive-step track table filename.
pub const FULL_TRACKS_FILENAME: &str = "df_full_tracks.csv";

/// Per-storm start/end summary table filename.
pub const START_END_FILENAME: &str = "df_start_end.csv";
