//! Header table construction and identifier expansion
//!
//! A HURDAT2 header line packs three meaningful fields behind a trailing
//! comma: `AL011970,             TESTSTORM,      2,`. The observation
//! count declares how many of the following track lines belong to the
//! storm, which is the only link between the two line classes.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::app::models::StormHeader;
use crate::constants::{FIELD_DELIMITER, HEADER_FIELD_COUNT};
use crate::error::{HurdatError, Result};

/// Expected storm-ID shape: two-letter basin code, storm number, year.
fn storm_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Z]{2}\d{6}$").expect("storm ID pattern is valid"))
}

/// Build the storm header table from classified header lines.
pub fn build_header_table(header_lines: &[String]) -> Result<Vec<StormHeader>> {
    let headers = header_lines
        .iter()
        .enumerate()
        .map(|(i, line)| parse_header_line(line, i + 1))
        .collect::<Result<Vec<_>>>()?;

    debug!("Built header table with {} storms", headers.len());
    Ok(headers)
}

/// Parse a single header line into a [`StormHeader`].
///
/// The line splits on the delimiter into ID, Name, ObservationCount; a
/// trailing fourth token (empty, from the trailing comma) is discarded.
/// The year derives from the last four characters of the ID.
fn parse_header_line(line: &str, record_number: usize) -> Result<StormHeader> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if fields.len() < HEADER_FIELD_COUNT {
        return Err(HurdatError::schema(
            "header",
            record_number,
            HEADER_FIELD_COUNT,
            fields.len(),
            line,
        ));
    }

    let id = fields[0].trim().to_string();
    let name = fields[1].trim().to_string();

    let observation_count = fields[2].trim().parse::<usize>().map_err(|e| {
        HurdatError::parse("ObservationCount", record_number, fields[2], e.to_string())
    })?;

    if !storm_id_pattern().is_match(&id) {
        // An odd ID still parses; surface it without aborting.
        warn!(
            "Storm ID '{}' in header record {} does not match the basin pattern",
            id, record_number
        );
    }

    if id.len() < 4 {
        return Err(HurdatError::parse(
            "ID",
            record_number,
            &id,
            "too short to carry a four-digit year suffix",
        ));
    }

    let year_suffix = &id[id.len() - 4..];
    let year = year_suffix
        .parse::<i32>()
        .map_err(|e| HurdatError::parse("Year", record_number, year_suffix, e.to_string()))?;

    Ok(StormHeader {
        id,
        name,
        observation_count,
        year,
    })
}

/// Expand the header table into a flat sequence of storm IDs, one per
/// expected track line, repeating each ID its declared observation count
/// times in header order.
pub fn expand_identifiers(headers: &[StormHeader]) -> Vec<String> {
    let total: usize = headers.iter().map(|h| h.observation_count).sum();
    let mut ids = Vec::with_capacity(total);

    for header in headers {
        for _ in 0..header.observation_count {
            ids.push(header.id.clone());
        }
    }

    ids
}
