//! Timestamp normalization and the synoptic-schedule filter
//!
//! HURDAT2 encodes observation time as a separate 8-digit date and
//! 4-digit hour. Both combine into a single timestamp, and rows outside
//! the four canonical synoptic hours (00, 06, 12, 18 UTC) are dropped:
//! intermediate entries such as landfall fixes occur at arbitrary minutes
//! and would break the fixed 6-hour step assumption downstream.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use super::TimedTrackRow;
use crate::app::models::RawTrackRow;
use crate::constants::{DATE_FORMAT, SYNOPTIC_HOURS};
use crate::error::{HurdatError, Result};

/// Combine date and hour fields into timestamps and restrict rows to the
/// synoptic schedule.
///
/// Integrity contract: after filtering, the table must be non-empty and
/// every storm present before filtering must retain at least one row.
/// A storm whose rows are all off-schedule would otherwise vanish
/// silently, corrupting the alignment the downstream tables rely on.
pub fn normalize_timestamps(rows: Vec<RawTrackRow>) -> Result<Vec<TimedTrackRow>> {
    let storms_before: HashSet<String> = rows.iter().map(|r| r.storm_id.clone()).collect();
    let total = rows.len();

    let mut retained = Vec::with_capacity(total);
    for row in rows {
        let timed = combine_date_hour(row)?;
        let hour_label = timed.time.format("%H:%M").to_string();
        if SYNOPTIC_HOURS.contains(&hour_label.as_str()) {
            retained.push(timed);
        }
    }

    debug!(
        "Synoptic filter: {} of {} rows retained",
        retained.len(),
        total
    );

    if retained.is_empty() {
        return Err(HurdatError::schedule(
            "no observation falls on the 6-hour synoptic schedule",
        ));
    }

    let storms_after: HashSet<&str> = retained.iter().map(|r| r.storm_id.as_str()).collect();
    for storm in &storms_before {
        if !storms_after.contains(storm.as_str()) {
            return Err(HurdatError::schedule(format!(
                "storm {} has no observation on the 6-hour synoptic schedule",
                storm
            )));
        }
    }

    Ok(retained)
}

/// Parse the raw date and hour encodings into a single timestamp.
fn combine_date_hour(row: RawTrackRow) -> Result<TimedTrackRow> {
    let date = NaiveDate::parse_from_str(&row.date, DATE_FORMAT)
        .map_err(|e| HurdatError::parse("Date", row.record_number, &row.date, e.to_string()))?;

    if row.hour.len() != 4 || !row.hour.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HurdatError::parse(
            "Hour",
            row.record_number,
            &row.hour,
            "expected 4-digit HHMM",
        ));
    }

    let hh: u32 = row.hour[..2].parse().expect("digits checked above");
    let mm: u32 = row.hour[2..].parse().expect("digits checked above");

    let time = date.and_hms_opt(hh, mm, 0).ok_or_else(|| {
        HurdatError::parse("Hour", row.record_number, &row.hour, "not a valid time of day")
    })?;

    Ok(TimedTrackRow {
        storm_id: row.storm_id,
        record_number: row.record_number,
        time,
        status: row.status,
        latitude: row.latitude,
        longitude: row.longitude,
        max_speed: row.max_speed,
        min_pressure: row.min_pressure,
        radii: row.radii,
    })
}
