//! Coordinate sign convention parsing
//!
//! HURDAT2 writes coordinates as `<magnitude><hemisphere>`: `28.0N`,
//! `94.8W`. South and West hemispheres negate the magnitude.

use tracing::debug;

use super::TimedTrackRow;
use crate::app::models::TrackObservation;
use crate::error::{HurdatError, Result};

/// Parse latitude and longitude strings into signed decimal degrees.
pub fn normalize_coordinates(rows: Vec<TimedTrackRow>) -> Result<Vec<TrackObservation>> {
    let observations = rows
        .into_iter()
        .map(|row| {
            let latitude = parse_latitude(&row.latitude, row.record_number)?;
            let longitude = parse_longitude(&row.longitude, row.record_number)?;

            let observation = TrackObservation {
                storm_id: row.storm_id,
                record_number: row.record_number,
                time: row.time,
                status: row.status,
                latitude,
                longitude,
                max_speed: row.max_speed,
                min_pressure: row.min_pressure,
                radii: row.radii,
            };
            observation.validate()?;
            Ok(observation)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Normalized coordinates for {} rows", observations.len());
    Ok(observations)
}

/// Parse a latitude of the form `<magnitude><N|S>`; S negates.
pub fn parse_latitude(raw: &str, record_number: usize) -> Result<f64> {
    parse_hemisphere_value("Latitude", raw, record_number, 'N', 'S')
}

/// Parse a longitude of the form `<magnitude><W|E>`; W negates.
pub fn parse_longitude(raw: &str, record_number: usize) -> Result<f64> {
    parse_hemisphere_value("Longitude", raw, record_number, 'E', 'W')
}

fn parse_hemisphere_value(
    field: &'static str,
    raw: &str,
    record_number: usize,
    positive: char,
    negative: char,
) -> Result<f64> {
    let trimmed = raw.trim();
    let (split_at, hemisphere) = trimmed.char_indices().last().ok_or_else(|| {
        HurdatError::parse(field, record_number, raw, "empty coordinate value")
    })?;

    let magnitude: f64 = trimmed[..split_at].trim().parse().map_err(|e| {
        HurdatError::parse(field, record_number, raw, format!("bad magnitude: {}", e))
    })?;

    if hemisphere == positive {
        Ok(magnitude)
    } else if hemisphere == negative {
        Ok(-magnitude)
    } else {
        Err(HurdatError::parse(
            field,
            record_number,
            raw,
            format!(
                "unrecognized hemisphere '{}' (expected '{}' or '{}')",
                hemisphere, positive, negative
            ),
        ))
    }
}
