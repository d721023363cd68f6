//! Track line schema and record parsing
//!
//! A HURDAT2 track line carries 21 positional comma-separated fields:
//! date, hour, event code, status, latitude, longitude, max speed, min
//! pressure, twelve wind radii (34/50/64 kt thresholds by NE/SE/SW/NW
//! quadrants) and an empty trailing token from the trailing comma. The
//! event code and trailing token are structurally unused and dropped.

use tracing::info;

use crate::app::models::RawTrackRow;
use crate::constants::{
    FIELD_DELIMITER, MISSING_SENTINEL, MISSING_SPEED_SENTINEL, RADIUS_FIELD_COUNT,
    TRACK_FIELD_COUNT,
};
use crate::error::{HurdatError, Result};

/// Positional indices within a track line.
const IDX_DATE: usize = 0;
const IDX_HOUR: usize = 1;
const IDX_STATUS: usize = 3;
const IDX_LATITUDE: usize = 4;
const IDX_LONGITUDE: usize = 5;
const IDX_MAX_SPEED: usize = 6;
const IDX_MIN_PRESSURE: usize = 7;
const IDX_RADII_START: usize = 8;

/// Build the track table by parsing every track line and attaching its
/// storm ID positionally from the expanded identifier sequence.
///
/// The identifier sequence must have exactly one entry per track line;
/// a mismatch means corrupted or truncated input and aborts the run.
pub fn build_track_table(track_lines: &[String], storm_ids: &[String]) -> Result<Vec<RawTrackRow>> {
    if storm_ids.len() != track_lines.len() {
        return Err(HurdatError::Alignment {
            expected_rows: storm_ids.len(),
            found_rows: track_lines.len(),
        });
    }

    let rows = track_lines
        .iter()
        .zip(storm_ids.iter())
        .enumerate()
        .map(|(i, (line, id))| parse_track_line(line, id, i + 1))
        .collect::<Result<Vec<_>>>()?;

    let missing: usize = rows
        .iter()
        .map(|r| {
            r.radii.iter().filter(|v| v.is_none()).count()
                + usize::from(r.max_speed.is_none())
                + usize::from(r.min_pressure.is_none())
        })
        .sum();
    info!(
        "Built track table: {} rows, {} missing numeric values",
        rows.len(),
        missing
    );

    Ok(rows)
}

/// Parse one track line into a [`RawTrackRow`].
fn parse_track_line(line: &str, storm_id: &str, record_number: usize) -> Result<RawTrackRow> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if fields.len() != TRACK_FIELD_COUNT {
        return Err(HurdatError::schema(
            "track",
            record_number,
            TRACK_FIELD_COUNT,
            fields.len(),
            line,
        ));
    }

    let max_speed = parse_numeric("MaxSpeed", fields[IDX_MAX_SPEED], record_number)?
        // Defect compensation: some source records use -99 for missing speed.
        .filter(|v| *v != MISSING_SPEED_SENTINEL);

    let min_pressure = parse_numeric("MinPressure", fields[IDX_MIN_PRESSURE], record_number)?;

    let mut radii = [None; RADIUS_FIELD_COUNT];
    for (slot, field) in radii
        .iter_mut()
        .zip(&fields[IDX_RADII_START..IDX_RADII_START + RADIUS_FIELD_COUNT])
    {
        *slot = parse_numeric("WindRadius", field, record_number)?;
    }

    Ok(RawTrackRow {
        storm_id: storm_id.to_string(),
        record_number,
        date: fields[IDX_DATE].trim().to_string(),
        hour: fields[IDX_HOUR].trim().to_string(),
        status: fields[IDX_STATUS].trim().to_string(),
        latitude: fields[IDX_LATITUDE].trim().to_string(),
        longitude: fields[IDX_LONGITUDE].trim().to_string(),
        max_speed,
        min_pressure,
        radii,
    })
}

/// Parse a numeric field, mapping the -999 sentinel to missing.
fn parse_numeric(
    field: &'static str,
    raw: &str,
    record_number: usize,
) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|e| HurdatError::parse(field, record_number, trimmed, e.to_string()))?;

    if value == MISSING_SENTINEL {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}
